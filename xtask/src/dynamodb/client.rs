//! Table inspection (Imperative Shell).

use aws_sdk_dynamodb::types::{KeyType, TableDescription};
use aws_sdk_dynamodb::Client;

use super::config::KeySchema;
use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let table = response.table().ok_or_else(|| {
                DynamodbError::AwsSdk(format!("DescribeTable returned no table for '{table_name}'"))
            })?;

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            Ok(Some(TableState {
                status,
                key_schema: key_schema(table),
            }))
        }
        Err(err)
            if err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception()) =>
        {
            Ok(None)
        }
        Err(err) => Err(DynamodbError::AwsSdk(err.to_string())),
    }
}

fn key_schema(table: &TableDescription) -> KeySchema {
    let name_of = |key_type: KeyType| {
        table
            .key_schema()
            .iter()
            .find(|element| *element.key_type() == key_type)
            .map(|element| element.attribute_name().to_string())
    };

    KeySchema {
        partition_key: name_of(KeyType::Hash).unwrap_or_default(),
        sort_key: name_of(KeyType::Range),
    }
}
