use std::collections::HashMap;
use std::sync::Arc;

use actix_web::HttpResponse;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, error, info};

use super::avangate::AvangateProcessor;
use super::braintree::BraintreeProcessor;
use super::dalpay::DalPayProcessor;
use super::paypal::PayPalProcessor;
use super::processor_trait::PaymentProcessor;
use super::recurly::RecurlyProcessor;
use super::redirect::redirect_to_processor;
use crate::config::ProcessorsConfig;
use crate::core::calendar;
use crate::core::{AppError, Result};
use crate::modules::processors::models::{
    FieldMap, ProcessorKind, Transaction, CSRF_TOKEN_KEY, PURCHASE_ID_KEY,
};
use crate::modules::processors::repositories::TransactionRepository;

/// Routes purchases and subscription changes to the configured processors
pub struct ProcessorService {
    processors: HashMap<ProcessorKind, Arc<dyn PaymentProcessor>>,
    repository: Arc<dyn TransactionRepository>,
}

impl ProcessorService {
    /// Create a service with no processors registered
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self {
            processors: HashMap::new(),
            repository,
        }
    }

    /// Create a service with every processor that has credentials in `config`
    pub fn from_config(
        config: &ProcessorsConfig,
        repository: Arc<dyn TransactionRepository>,
    ) -> Self {
        let mut service = Self::new(repository);

        if let Some(ref cfg) = config.avangate {
            service.register_processor(Arc::new(AvangateProcessor::new(cfg.clone())));
        }
        if let Some(ref cfg) = config.paypal {
            service.register_processor(Arc::new(PayPalProcessor::new(cfg.clone())));
        }
        if let Some(ref cfg) = config.braintree {
            service.register_processor(Arc::new(BraintreeProcessor::new(cfg.clone())));
        }
        if let Some(ref cfg) = config.dalpay {
            service.register_processor(Arc::new(DalPayProcessor::new(cfg.clone())));
        }
        if let Some(ref cfg) = config.recurly {
            service.register_processor(Arc::new(RecurlyProcessor::new(cfg.clone())));
        }

        service
    }

    /// Register a processor, replacing any previous one of the same kind
    pub fn register_processor(&mut self, processor: Arc<dyn PaymentProcessor>) {
        self.processors.insert(processor.kind(), processor);
    }

    /// Get a processor by kind
    pub fn get_processor(&self, kind: ProcessorKind) -> Result<Arc<dyn PaymentProcessor>> {
        self.processors
            .get(&kind)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Processor '{}' is not configured", kind)))
    }

    /// List configured processors, ordered by id
    pub fn list_processors(&self) -> Vec<ProcessorInfo> {
        let mut infos: Vec<ProcessorInfo> = self
            .processors
            .keys()
            .map(|kind| ProcessorInfo {
                id: kind.id(),
                name: kind.name().to_string(),
            })
            .collect();
        infos.sort_by_key(|info| info.id);
        infos
    }

    pub async fn find_transaction(&self, id: i64) -> Result<Transaction> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Transaction {}", id)))
    }

    /// Adjust the item's billing state, then send the customer to the processor
    pub async fn make_purchase(
        &self,
        fields: FieldMap,
        transaction: &mut Transaction,
    ) -> Result<HttpResponse> {
        self.make_purchase_on(fields, transaction, calendar::today()).await
    }

    /// Same as [`Self::make_purchase`] as seen on `today`.
    ///
    /// The adjusted item is stored, and `transaction` updated, only once the redirect
    /// has been rendered.
    pub async fn make_purchase_on(
        &self,
        fields: FieldMap,
        transaction: &mut Transaction,
        today: NaiveDate,
    ) -> Result<HttpResponse> {
        // Fail before touching the item when the processor is unavailable
        self.get_processor(transaction.processor)?;

        let mut adjusted = transaction.clone();
        let restarted = adjusted.item.adjust(today);

        let response = self.real_make_purchase(fields, &adjusted).await?;

        if restarted {
            info!(
                transaction_id = adjusted.id,
                item_id = adjusted.item.id,
                due_payment_date = %adjusted.item.due_payment_date,
                "Restarted lapsed subscription before purchase"
            );
            self.repository.update_item(&adjusted.item).await?;
        }

        *transaction = adjusted;
        Ok(response)
    }

    /// Amend the fields for a new purchase and render the redirect
    pub async fn real_make_purchase(
        &self,
        fields: FieldMap,
        transaction: &Transaction,
    ) -> Result<HttpResponse> {
        let processor = self.get_processor(transaction.processor)?;
        let item = &transaction.item;
        item.currency
            .validate_amount(item.price)
            .map_err(AppError::validation)?;

        info!(
            processor = %transaction.processor,
            transaction_id = transaction.id,
            "Redirecting purchase to processor"
        );

        match processor.amend_hash_new_purchase(transaction, fields).await {
            Ok(amended) => redirect_to_processor(amended),
            Err(e) => {
                error!(
                    processor = %transaction.processor,
                    transaction_id = transaction.id,
                    error = %e,
                    "Failed to prepare purchase"
                );
                Err(e)
            }
        }
    }

    /// Entry point for a submitted checkout form
    pub async fn make_purchase_from_form(
        &self,
        mut fields: FieldMap,
        transaction: &mut Transaction,
    ) -> Result<HttpResponse> {
        strip_csrf_token(&mut fields);
        self.make_purchase(fields, transaction).await
    }

    /// Amend the fields for a subscription change and render the redirect
    pub async fn change_subscription(
        &self,
        transaction: &Transaction,
        fields: FieldMap,
    ) -> Result<HttpResponse> {
        let processor = self.get_processor(transaction.processor)?;

        info!(
            processor = %transaction.processor,
            transaction_id = transaction.id,
            "Redirecting subscription change to processor"
        );

        let amended = processor
            .amend_hash_change_subscription(transaction, fields)
            .await?;
        redirect_to_processor(amended)
    }

    /// Entry point for a submitted subscription change form; the form names the
    /// transaction in `payee_purchaseid`
    pub async fn change_subscription_from_form(
        &self,
        mut fields: FieldMap,
    ) -> Result<HttpResponse> {
        let raw_id = fields.take_required(PURCHASE_ID_KEY)?;
        let id: i64 = raw_id.trim().parse().map_err(|_| {
            AppError::validation(format!("Invalid {}: {}", PURCHASE_ID_KEY, raw_id))
        })?;
        strip_csrf_token(&mut fields);

        let transaction = self.find_transaction(id).await?;
        self.change_subscription(&transaction, fields).await
    }

    /// Remaining days and subscription readiness of a transaction on `today`
    pub fn proration_on(&self, transaction: &Transaction, today: NaiveDate) -> Result<Proration> {
        let processor = self.get_processor(transaction.processor)?;

        Ok(Proration {
            transaction_id: transaction.id,
            processor: transaction.processor,
            remaining_days: processor.calculate_remaining_days_on(transaction, today),
            subscription_allowed_date: processor.subscription_allowed_date(transaction),
            ready_for_subscription: processor.ready_for_subscription_on(transaction, today),
        })
    }
}

fn strip_csrf_token(fields: &mut FieldMap) {
    if fields.remove(CSRF_TOKEN_KEY).is_none() {
        debug!("Form submitted without {}", CSRF_TOKEN_KEY);
    }
}

/// Processor information for listing
#[derive(Debug, Clone, Serialize)]
pub struct ProcessorInfo {
    pub id: i32,
    pub name: String,
}

/// Billing position of a transaction
#[derive(Debug, Clone, Serialize)]
pub struct Proration {
    pub transaction_id: i64,
    pub processor: ProcessorKind,
    pub remaining_days: i64,
    pub subscription_allowed_date: NaiveDate,
    pub ready_for_subscription: bool,
}
