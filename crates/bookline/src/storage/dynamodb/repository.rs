//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `bookline_core::storage` using
//! DynamoDB. Each operation is one independent SDK call; there is no shared
//! mutable resource between requests.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use bookline_core::appointment::Appointment;
use bookline_core::storage::{AppointmentRepository, Result};

use super::conversions::{appointment_to_item, item_to_appointment, KEY_ATTRIBUTE};
use super::error::{map_get_item_error, map_put_item_error, map_update_item_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
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

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain; the region comes from the
    /// environment (`AWS_REGION`), falling back to `us-east-1`.
    pub async fn from_config(config: &Config) -> Self {
        let region = aws_config::meta::region::RegionProviderChain::default_provider()
            .or_else("us-east-1");
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region)
            .load()
            .await;
        let client = Client::new(&aws_config);

        Self::new(client, config.appointments_table.clone())
    }
}

#[async_trait]
impl AppointmentRepository for DynamoDbRepository {
    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, "Appointment", id.to_string()))?;

        match result.item {
            Some(item) => Ok(Some(item_to_appointment(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_appointment(&self, appointment: &Appointment) -> Result<()> {
        let item = appointment_to_item(appointment);

        // A conditionless put: the key is a freshly generated v4 UUID, so a
        // collision with an existing item is not a practical concern.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Appointment", appointment.id.to_string()))?;

        Ok(())
    }

    async fn reschedule_appointment(&self, id: Uuid, date: &str, time: &str) -> Result<()> {
        // `date` and `time` are reserved words in DynamoDB expressions.
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .update_expression("SET #d = :date, #t = :time")
            .expression_attribute_names("#d", "date")
            .expression_attribute_names("#t", "time")
            .expression_attribute_values(":date", AttributeValue::S(date.to_string()))
            .expression_attribute_values(":time", AttributeValue::S(time.to_string()))
            .condition_expression(format!("attribute_exists({KEY_ATTRIBUTE})"))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, "Appointment", id.to_string()))?;

        Ok(())
    }
}
