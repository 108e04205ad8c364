pub mod host_trait;
