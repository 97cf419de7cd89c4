//! Single-resource lookup against a cluster API.
//!
//! [`first_in_namespace`] lists the instances of a custom resource in a
//! namespace through a [`ResourceClient`] and returns the first one. An
//! empty list, or a list call the client reports as "not found", becomes
//! [`LookupError::NotFound`]; any other failure is wrapped in a
//! [`StructuredError`] carrying the namespace.
//!
//! # Examples
//!
//! ```
//! use std::convert::Infallible;
//! use structured_error::lookup::{first_in_namespace, GroupResource, ResourceClient};
//!
//! struct Static(Vec<&'static str>);
//!
//! impl ResourceClient for Static {
//!     type Resource = &'static str;
//!     type Error = Infallible;
//!
//!     fn list(&self, _namespace: &str) -> Result<Vec<Self::Resource>, Self::Error> {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn is_not_found(_error: &Self::Error) -> bool {
//!         false
//!     }
//! }
//!
//! const ES: GroupResource = GroupResource::new("logging.openshift.io", "Elasticsearch");
//!
//! let found = first_in_namespace(&Static(vec!["es-a", "es-b"]), ES, "elasticsearch", "logging");
//! assert_eq!(found.unwrap(), "es-a");
//!
//! let missing = first_in_namespace(&Static(vec![]), ES, "elasticsearch", "logging");
//! assert!(missing.unwrap_err().is_not_found());
//! ```

use core::fmt;
use std::error::Error;

use crate::types::StructuredError;

/// API group and resource name of a custom resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupResource {
    pub group: &'static str,
    pub resource: &'static str,
}

impl GroupResource {
    /// Descriptor for `resource` in API `group`; an empty group is the core group.
    #[inline]
    pub const fn new(group: &'static str, resource: &'static str) -> Self {
        Self { group, resource }
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            f.write_str(self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// Client able to list one kind of resource in a namespace.
pub trait ResourceClient {
    type Resource;
    type Error: Error + Send + Sync + 'static;

    fn list(&self, namespace: &str) -> Result<Vec<Self::Resource>, Self::Error>;

    /// Whether `error` means the resource type or namespace does not exist.
    fn is_not_found(error: &Self::Error) -> bool;
}

/// Failure of [`first_in_namespace`].
///
/// `NotFound` renders its own `<resource>.<group> "<name>" not found` text
/// rather than the client's message, so callers see the same wording
/// whichever client produced it. The client error stays reachable through
/// [`Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The list was empty, or the client reported the resource as missing.
    #[error("{kind} \"{name}\" not found")]
    NotFound {
        kind: GroupResource,
        name: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync + 'static>>,
    },

    /// Any other client failure, carrying `namespace` and `resource` pairs.
    #[error(transparent)]
    Failed(#[from] StructuredError),
}

impl LookupError {
    /// Whether this is [`LookupError::NotFound`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Returns the first `kind` resource listed in `namespace`.
///
/// `name` only appears in the not-found error.
pub fn first_in_namespace<C>(
    client: &C,
    kind: GroupResource,
    name: &str,
    namespace: &str,
) -> Result<C::Resource, LookupError>
where
    C: ResourceClient,
{
    let items = match client.list(namespace) {
        Ok(items) => items,
        Err(err) if C::is_not_found(&err) => {
            return Err(LookupError::NotFound {
                kind,
                name: name.to_owned(),
                source: Some(Box::new(err)),
            });
        },
        Err(err) => {
            let message = format!(
                "unable to get {} instance in {:?}",
                kind.resource.to_lowercase(),
                namespace
            );
            return Err(StructuredError::wrap_opaque(err, message)
                .with_kv("namespace", namespace.to_owned())
                .with_kv("resource", kind.to_string())
                .into());
        },
    };

    items
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NotFound { kind, name: name.to_owned(), source: None })
}
