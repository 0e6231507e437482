//! DynamoDB repository implementation.
//!
//! Implements `StudentRepository` from `studentinfo_core::storage` with one
//! single-item call per operation. No call carries a condition expression.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{ReturnConsumedCapacity, ReturnValue};
use aws_sdk_dynamodb::Client;

use studentinfo_core::storage::{Result, StudentRepository};
use studentinfo_core::student::{
    record_from_confirmed, StudentChanges, StudentKey, StudentRecord,
};

use super::conversions::{attributes_to_changes, changes_to_values, item_to_student, student_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_update_item_error,
};
use super::keys;
use crate::config::Config;

/// DynamoDB-based student repository.
///
/// The table name is fixed at construction and never re-read.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository from loaded configuration.
    pub async fn from_config(config: &Config) -> Self {
        Self::new(sdk_client(config).await, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Builds a DynamoDB client from the SDK default credential chain, with the
/// region and optional endpoint override from `config`.
pub async fn sdk_client(config: &Config) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}

#[async_trait]
impl StudentRepository for DynamoDbRepository {
    async fn get_student(&self, key: &StudentKey) -> Result<Option<StudentRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::key_attributes(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_student(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_student(&self, record: &StudentRecord) -> Result<()> {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(student_to_item(record)))
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .send()
            .await
            .map_err(map_put_item_error)?;

        if let Some(capacity) = result.consumed_capacity() {
            tracing::debug!(
                table = %self.table_name,
                capacity_units = ?capacity.capacity_units(),
                "PutItem consumed capacity"
            );
        }

        Ok(())
    }

    async fn update_student(
        &self,
        key: &StudentKey,
        changes: &StudentChanges,
    ) -> Result<StudentRecord> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::key_attributes(key)))
            .update_expression(keys::UPDATE_EXPRESSION)
            .set_expression_attribute_values(Some(changes_to_values(changes)))
            .return_values(ReturnValue::AllNew);

        for (placeholder, attribute) in keys::UPDATE_NAMES {
            request = request.expression_attribute_names(placeholder, attribute);
        }

        let result = request.send().await.map_err(map_update_item_error)?;

        let confirmed = result
            .attributes
            .as_ref()
            .map(|attributes| attributes_to_changes(key, attributes))
            .transpose()?;

        Ok(record_from_confirmed(key, changes, confirmed))
    }

    async fn delete_student(&self, key: &StudentKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::key_attributes(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
