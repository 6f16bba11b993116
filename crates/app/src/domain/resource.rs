//! Generic catalog resource operations.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    marker::PhantomData,
};

use catalog::{ids::Id, validation::Validate};
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::client::{ApiError, CatalogClient, CatalogError, ContextExt as _, path_segment};

/// A top-level collection exposed by the catalog service.
pub trait Resource: Send + Sync + 'static {
    /// Record returned by the catalog.
    type Record: DeserializeOwned + Validate + Send;

    /// Create payload.
    type New: Serialize + Send + Sync;

    /// Partial update payload.
    type Update: Serialize + Send + Sync;

    /// Collection path, e.g. `/products`.
    const PATH: &'static str;

    /// Singular noun used in error messages.
    const SINGULAR: &'static str;

    /// Plural noun used in error messages.
    const PLURAL: &'static str;

    /// How the identity is described in error messages.
    const ID_LABEL: &'static str = "ID";

    /// Adjust a create payload before it is sent.
    fn prepare(new: Self::New) -> Self::New {
        new
    }
}

/// Identity of a resource's records.
pub type RecordId<R> = Id<<R as Resource>::Record>;

/// List/get/create/update/delete for one catalog collection.
pub struct ResourceClient<R> {
    client: CatalogClient,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceClient<R> {
    /// Create a resource client sharing `client`'s connection pool.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    /// Underlying catalog client.
    #[must_use]
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Retrieves every record in the collection.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] with context `Failed to fetch <plural>`.
    pub async fn list(&self) -> Result<Vec<R::Record>, CatalogError> {
        self.client
            .get::<Vec<R::Record>>(R::PATH)
            .await
            .and_then(validated)
            .context(|| format!("Failed to fetch {}", R::PLURAL))
    }

    /// Retrieves a single record.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`]; [`CatalogError::is_not_found`] tells a
    /// missing record apart from other failures.
    pub async fn get(&self, id: &RecordId<R>) -> Result<R::Record, CatalogError> {
        let context = || format!("Failed to fetch {} with {} {id}", R::SINGULAR, R::ID_LABEL);
        let path = Self::item_path(id).context(context)?;

        self.client
            .get::<R::Record>(&path)
            .await
            .and_then(validated)
            .context(context)
    }

    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] with context `Failed to create <singular>`.
    pub async fn create(&self, new: R::New) -> Result<R::Record, CatalogError> {
        let new = R::prepare(new);

        self.client
            .send::<_, R::Record>(Method::POST, R::PATH, &new)
            .await
            .and_then(validated)
            .context(|| format!("Failed to create {}", R::SINGULAR))
    }

    /// Applies a partial update to a record.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] with context `Failed to update <singular> ...`.
    pub async fn update(
        &self,
        id: &RecordId<R>,
        update: &R::Update,
    ) -> Result<R::Record, CatalogError> {
        let context = || format!("Failed to update {} with {} {id}", R::SINGULAR, R::ID_LABEL);
        let path = Self::item_path(id).context(context)?;

        self.client
            .send::<_, R::Record>(Method::PUT, &path, update)
            .await
            .and_then(validated)
            .context(context)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] with context `Failed to delete <singular> ...`.
    pub async fn delete(&self, id: &RecordId<R>) -> Result<(), CatalogError> {
        let context = || format!("Failed to delete {} with {} {id}", R::SINGULAR, R::ID_LABEL);
        let path = Self::item_path(id).context(context)?;

        self.client.delete_empty(&path).await.context(context)
    }

    /// Path of one record, with `id` encoded as a single segment.
    pub(crate) fn item_path(id: &RecordId<R>) -> Result<String, ApiError> {
        Ok(format!("{}/{}", R::PATH, path_segment(id.as_str())?))
    }
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ResourceClient")
            .field("path", &R::PATH)
            .field("client", &self.client)
            .finish()
    }
}

pub(crate) fn validated<T: Validate>(record: T) -> Result<T, ApiError> {
    record.validate()?;

    Ok(record)
}
