// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

// Project imports
use crate::providers::{ReconcileOutcome, WriteAction};

// Current module imports
use super::constants::{CLOUDFLARE_API_BASE, REQUEST_TIMEOUT_SECS};
use super::errors::CloudflareError;
use super::models::{DnsRecord, ListResponse, WriteResponse};
use super::types::{CfConfig, Cloudflare};

/// Creates a reqwest client with the appropriate headers for Cloudflare API.
pub(super) fn create_reqwest_client(config: &CfConfig) -> Result<Client, CloudflareError> {
    if config.api_token.trim().is_empty() {
        return Err(CloudflareError::InvalidApiToken(config.zone_id.clone()));
    }

    // Create headers.
    let mut headers: HeaderMap = HeaderMap::new();

    // Mark security-sensitive headers with `set_sensitive`.
    let bearer_token: String = format!("Bearer {}", &config.api_token);
    let mut auth_value: HeaderValue =
        HeaderValue::from_str(&bearer_token).map_err(CloudflareError::InvalidHeaderValue)?;
    auth_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth_value);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    // Build the client.
    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(CloudflareError::HttpClientBuild)
}

fn base_api_url(zone_id: &str) -> String {
    format!("{}/zones/{}", CLOUDFLARE_API_BASE, zone_id)
}

/// What a pass decided to do after scanning the zone's A records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum RecordPlan {
    Create,
    Update { record_id: String },
    Skip { record_id: String },
}

/// Scans the listed records once and decides the minimal converging action.
///
/// When several records carry the target name, the last one in listing
/// order determines both the record id and whether an update is needed.
/// No ambiguity error is raised.
pub(super) fn plan_action(
    records: &[DnsRecord],
    config: &CfConfig,
    ipv4_addr: &str,
) -> RecordPlan {
    let mut matched: Option<(String, bool)> = None;

    for record in records {
        if record.name != config.domain {
            continue;
        }

        let diverged: bool = record.content != ipv4_addr || record.proxied != config.proxied;
        matched = Some((record.id.clone(), diverged));
    }

    match matched {
        None => RecordPlan::Create,
        Some((record_id, true)) => RecordPlan::Update { record_id },
        Some((record_id, false)) => RecordPlan::Skip { record_id },
    }
}

/// Lists all A records in the target zone.
///
/// Success requires both a 2xx status and `success: true` in the envelope;
/// anything else fails the listing, and with it the whole pass.
pub(super) async fn list_dns_records(
    cloudflare: &Cloudflare,
) -> Result<Vec<DnsRecord>, CloudflareError> {
    let url: String = format!(
        "{}/dns_records?type=A",
        base_api_url(&cloudflare.config.zone_id)
    );

    debug!(
        zone = %cloudflare.config.zone_id,
        domain = %cloudflare.config.domain,
        "Listing DNS records"
    );

    let response = cloudflare
        .client
        .get(&url)
        .send()
        .await
        .map_err(CloudflareError::Network)?;

    let status: StatusCode = response.status();
    let body: String = response.text().await.map_err(CloudflareError::Network)?;

    if !status.is_success() {
        return Err(CloudflareError::ListFailed {
            zone: cloudflare.config.zone_id.clone(),
            status,
            body,
        });
    }

    let listing: ListResponse =
        serde_json::from_str(&body).map_err(|e| CloudflareError::ListFailed {
            zone: cloudflare.config.zone_id.clone(),
            status,
            body: format!("Failed to parse response: {} - Raw: {}", e, body),
        })?;

    if !listing.success {
        return Err(CloudflareError::ListFailed {
            zone: cloudflare.config.zone_id.clone(),
            status,
            body,
        });
    }

    Ok(listing.result)
}

/// Creates a new A record; returns its id on success.
pub(super) async fn create_dns_record(
    cloudflare: &Cloudflare,
    payload: &Value,
) -> Result<String, CloudflareError> {
    let url: String = format!("{}/dns_records", base_api_url(&cloudflare.config.zone_id));

    let response = cloudflare
        .client
        .post(&url)
        .json(payload)
        .send()
        .await
        .map_err(|e| CloudflareError::CreateFailed {
            domain: cloudflare.config.domain.clone(),
            message: format!("Failed to send create request: {}", e),
        })?;

    let written: DnsRecord = decode_write_response(cloudflare, response, WriteAction::Create)
        .await?
        .ok_or_else(|| CloudflareError::CreateFailed {
            domain: cloudflare.config.domain.clone(),
            message: "Response envelope is missing the created record".to_string(),
        })?;

    Ok(written.id)
}

/// Updates an existing record in place with the same payload shape.
pub(super) async fn update_dns_record(
    cloudflare: &Cloudflare,
    record_id: &str,
    payload: &Value,
) -> Result<(), CloudflareError> {
    let url: String = format!(
        "{}/dns_records/{}",
        base_api_url(&cloudflare.config.zone_id),
        record_id
    );

    let response = cloudflare
        .client
        .put(&url)
        .json(payload)
        .send()
        .await
        .map_err(|e| CloudflareError::UpdateFailed {
            domain: cloudflare.config.domain.clone(),
            message: format!("Failed to send update request: {}", e),
        })?;

    decode_write_response(cloudflare, response, WriteAction::Update).await?;

    Ok(())
}

/// Checks a write response for both HTTP and envelope success.
async fn decode_write_response(
    cloudflare: &Cloudflare,
    response: reqwest::Response,
    action: WriteAction,
) -> Result<Option<DnsRecord>, CloudflareError> {
    let domain: String = cloudflare.config.domain.clone();
    let status: StatusCode = response.status();

    let write_error = |message: String| match action {
        WriteAction::Create => CloudflareError::CreateFailed {
            domain: domain.clone(),
            message,
        },
        WriteAction::Update => CloudflareError::UpdateFailed {
            domain: domain.clone(),
            message,
        },
    };

    let body: String = response
        .text()
        .await
        .map_err(|e| write_error(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
        return Err(write_error(format!("HTTP {} - {}", status, body)));
    }

    let envelope: WriteResponse = serde_json::from_str(&body)
        .map_err(|e| write_error(format!("Failed to parse response: {} - Raw: {}", e, body)))?;

    if !envelope.success {
        return Err(write_error(format!("HTTP {} - {}", status, body)));
    }

    Ok(envelope.result)
}

/// Runs one reconciliation pass for the configured domain.
pub(super) async fn reconcile_record(
    cloudflare: &Cloudflare,
    ipv4_addr: &str,
) -> Result<ReconcileOutcome, CloudflareError> {
    let records: Vec<DnsRecord> = list_dns_records(cloudflare).await?;
    let plan: RecordPlan = plan_action(&records, &cloudflare.config, ipv4_addr);

    let payload: Value = json!({
        "type": "A",
        "name": cloudflare.config.domain,
        "content": ipv4_addr,
        "ttl": 1, // auto
        "proxied": cloudflare.config.proxied,
    });

    match plan {
        RecordPlan::Create => {
            info!(
                domain = %cloudflare.config.domain,
                "Creating DNS record with IP {}",
                ipv4_addr
            );

            match create_dns_record(cloudflare, &payload).await {
                Ok(record_id) => {
                    info!(
                        domain = %cloudflare.config.domain,
                        record_id = %record_id,
                        "Successfully created DNS record"
                    );
                    Ok(ReconcileOutcome::Created { record_id })
                }
                Err(e) => {
                    warn!(
                        domain = %cloudflare.config.domain,
                        "Failed to create DNS record: {}",
                        e
                    );
                    Ok(ReconcileOutcome::FailedWrite {
                        action: WriteAction::Create,
                        record_id: None,
                    })
                }
            }
        }
        RecordPlan::Update { record_id } => {
            info!(
                domain = %cloudflare.config.domain,
                record_id = %record_id,
                "Updating DNS record to {}",
                ipv4_addr
            );

            match update_dns_record(cloudflare, &record_id, &payload).await {
                Ok(()) => {
                    info!(
                        domain = %cloudflare.config.domain,
                        record_id = %record_id,
                        "Successfully updated DNS record"
                    );
                    Ok(ReconcileOutcome::Updated { record_id })
                }
                Err(e) => {
                    warn!(
                        domain = %cloudflare.config.domain,
                        record_id = %record_id,
                        "Failed to update DNS record: {}",
                        e
                    );
                    Ok(ReconcileOutcome::FailedWrite {
                        action: WriteAction::Update,
                        record_id: Some(record_id),
                    })
                }
            }
        }
        RecordPlan::Skip { record_id } => {
            info!(
                domain = %cloudflare.config.domain,
                record_id = %record_id,
                "Skip updating because the existing DNS record is up-to-date"
            );
            Ok(ReconcileOutcome::Skipped { record_id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> CfConfig {
        CfConfig {
            api_token: "token".to_string(),
            zone_id: "zone123".to_string(),
            domain: "home.example.com".to_string(),
            proxied: false,
        }
    }

    fn record(id: &str, name: &str, content: &str, proxied: bool) -> DnsRecord {
        DnsRecord {
            id: id.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            proxied,
        }
    }

    #[test]
    fn empty_listing_plans_a_create() {
        let plan = plan_action(&[], &target(), "2.2.2.2");
        assert_eq!(plan, RecordPlan::Create);
    }

    #[test]
    fn unrelated_records_plan_a_create() {
        let records = vec![record("a", "other.example.com", "2.2.2.2", false)];
        let plan = plan_action(&records, &target(), "2.2.2.2");
        assert_eq!(plan, RecordPlan::Create);
    }

    #[test]
    fn diverged_content_plans_an_update() {
        let records = vec![record("a", "home.example.com", "1.1.1.1", false)];
        let plan = plan_action(&records, &target(), "2.2.2.2");
        assert_eq!(
            plan,
            RecordPlan::Update {
                record_id: "a".to_string()
            }
        );
    }

    #[test]
    fn diverged_proxied_flag_plans_an_update() {
        let records = vec![record("a", "home.example.com", "2.2.2.2", true)];
        let plan = plan_action(&records, &target(), "2.2.2.2");
        assert_eq!(
            plan,
            RecordPlan::Update {
                record_id: "a".to_string()
            }
        );
    }

    #[test]
    fn matching_record_plans_a_skip() {
        let records = vec![record("a", "home.example.com", "2.2.2.2", false)];
        let plan = plan_action(&records, &target(), "2.2.2.2");
        assert_eq!(
            plan,
            RecordPlan::Skip {
                record_id: "a".to_string()
            }
        );
    }

    #[test]
    fn planning_is_idempotent() {
        let records = vec![record("a", "home.example.com", "2.2.2.2", false)];
        let first = plan_action(&records, &target(), "2.2.2.2");
        let second = plan_action(&records, &target(), "2.2.2.2");
        assert_eq!(first, second);
        assert_eq!(
            first,
            RecordPlan::Skip {
                record_id: "a".to_string()
            }
        );
    }

    #[test]
    fn last_matching_record_wins() {
        let records = vec![
            record("a", "home.example.com", "1.1.1.1", false),
            record("b", "home.example.com", "2.2.2.2", false),
        ];

        let plan = plan_action(&records, &target(), "2.2.2.2");
        assert_eq!(
            plan,
            RecordPlan::Skip {
                record_id: "b".to_string()
            }
        );
    }

    #[test]
    fn last_matching_record_wins_for_updates_too() {
        let records = vec![
            record("a", "home.example.com", "2.2.2.2", false),
            record("b", "home.example.com", "1.1.1.1", false),
        ];

        let plan = plan_action(&records, &target(), "2.2.2.2");
        assert_eq!(
            plan,
            RecordPlan::Update {
                record_id: "b".to_string()
            }
        );
    }

    #[test]
    fn empty_api_token_fails_client_creation() {
        let config = CfConfig {
            api_token: "".to_string(),
            ..target()
        };

        let result = create_reqwest_client(&config);
        assert!(matches!(result, Err(CloudflareError::InvalidApiToken(_))));
    }

    #[test]
    fn client_creation_succeeds_with_a_token() {
        assert!(create_reqwest_client(&target()).is_ok());
    }
}
