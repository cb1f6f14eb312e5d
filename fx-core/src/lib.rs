pub mod constants;
pub mod delete;
pub mod errors;
pub mod k8s;
pub mod logging;
pub mod prompt;

pub mod prelude {
    pub use fx_api::v1beta1::GitRepository;
    pub use kube::ResourceExt;

    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::k8s::{
        DeadlineScope,
        NamespacedName,
        ResourceClient,
    };
}

#[cfg(test)]
mod tests;
