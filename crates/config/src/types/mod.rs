//! Typed views of resolved worker configuration snapshots.

mod groups;
mod worker;

pub use groups::{
    AnalyticsDataset, AssetsConfig, HelloWorldBinding, HyperdriveBinding, ImagesBinding,
    KvNamespace, QueueConfig, QueueProducer, ServiceBinding, TailConsumer, UnsafeConfig,
    UnsafeMetadataBinding,
};
pub use worker::WorkerConfig;
