//! Soroban RPC client — polls `getEvents` and decodes campaign events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//!
//! ## Value shapes
//!
//! Event values arrive either as plain JSON objects (`{"voter": "G…"}`) or in
//! the tagged ScVal JSON form (`{"map": [{"key": {"symbol": "voter"}, …}]}`).
//! [`flatten_scval`] folds the tagged form into the plain one before decoding.

use std::time::Duration;

use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{CampaignEvent, EventKind};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// Topic list, one JSON-encoded ScVal per entry
    pub topic: Vec<String>,
    /// Event data
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
    #[serde(rename = "pagingToken")]
    pub paging_token: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events from the RPC.
///
/// * `start_ledger` — the ledger sequence to scan from (inclusive).
/// * `cursor`       — optional opaque pagination cursor from a previous response.
/// * `limit`        — maximum number of events to return.
///
/// Returns `(events, next_cursor, latest_ledger)`.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_id: &str,
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<(Vec<RawEvent>, Option<String>, Option<u64>)> {
    let mut backoff = INITIAL_BACKOFF_SECS;

    loop {
        let params = build_params(contract_id, start_ledger, cursor, limit);

        let response = client
            .post(rpc_url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getEvents",
                "params": params,
            }))
            .send()
            .await;

        match response {
            Err(e) => {
                warn!("RPC request failed (will retry in {backoff}s): {e}");
                tokio::time::sleep(Duration::from_secs(backoff)).await;
                backoff = next_backoff(backoff);
                continue;
            }
            Ok(resp) => {
                if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    warn!("Rate-limited by RPC (will retry in {backoff}s)");
                    tokio::time::sleep(Duration::from_secs(backoff)).await;
                    backoff = next_backoff(backoff);
                    continue;
                }

                let body: RpcResponse = resp.json().await?;

                if let Some(err) = body.error {
                    if is_hard_error(err.code) {
                        return Err(IndexerError::EventParse(format!(
                            "RPC hard error {}: {}",
                            err.code, err.message
                        )));
                    }
                    warn!(
                        "RPC soft error (will retry in {backoff}s): {} {}",
                        err.code, err.message
                    );
                    tokio::time::sleep(Duration::from_secs(backoff)).await;
                    backoff = next_backoff(backoff);
                    continue;
                }

                let result = body.result.ok_or_else(|| {
                    IndexerError::EventParse("Empty result from getEvents".to_string())
                })?;

                debug!(
                    "Fetched {} events (latest_ledger={:?})",
                    result.events.len(),
                    result.latest_ledger
                );

                return Ok((result.events, result.cursor, result.latest_ledger));
            }
        }
    }
}

fn next_backoff(current: u64) -> u64 {
    (current * 2).min(MAX_BACKOFF_SECS)
}

/// Invalid request / unknown method will not fix themselves on retry.
fn is_hard_error(code: i64) -> bool {
    code == -32600 || code == -32601
}

fn build_params(contract_id: &str, start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": [contract_id]
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode a list of raw RPC events into [`CampaignEvent`] structs.
///
/// Events from failed contract calls are dropped.
pub fn decode_events(raw: &[RawEvent], contract_id: &str) -> Vec<CampaignEvent> {
    raw.iter()
        .filter(|e| e.in_successful_contract_call.unwrap_or(true))
        .filter_map(|e| decode_single(e, contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, contract_id: &str) -> Option<CampaignEvent> {
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let event_id = raw
        .id
        .clone()
        .or_else(|| raw.paging_token.clone())
        .unwrap_or_else(|| {
            format!(
                "{ledger}:{}:{}",
                raw.tx_hash.as_deref().unwrap_or(""),
                kind.as_str()
            )
        });

    let mut event = CampaignEvent {
        event_id,
        event_type: kind.as_str().to_string(),
        voter: None,
        token_id: None,
        ticket_hash: None,
        candidate_ids: Vec::new(),
        detail: None,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| contract_id.to_string()),
        tx_hash: raw.tx_hash.clone(),
    };

    let value = flatten_scval(&raw.value);
    match kind {
        EventKind::Voted => {
            event.voter = extract_field(&value, &["voter"]);
            event.token_id = extract_i64(&value, "token_id");
            event.ticket_hash = extract_field(&value, &["ticket_hash"]).map(|h| normalize_hex(&h));
            event.candidate_ids = value
                .get("candidate_ids")
                .and_then(Value::as_array)
                .map(|ids| ids.iter().filter_map(as_u32).collect())
                .unwrap_or_default();
        }
        EventKind::TransferSingle => {
            event.voter = extract_field(&value, &["to"]);
            event.token_id = extract_i64(&value, "token_id");
            event.detail = extract_field(&value, &["amount"]);
        }
        EventKind::UriSet | EventKind::ContractUriSet | EventKind::EndDateSet => {
            event.detail = scalar_to_string(&value);
        }
        EventKind::OwnershipTransferred => {
            // (previous, new)
            event.detail = value
                .as_array()
                .and_then(|pair| pair.get(1))
                .and_then(scalar_to_string);
        }
        EventKind::Unknown => {}
    }

    Some(event)
}

/// Fold tagged ScVal JSON (`{"u32": 1}`, `{"vec": […]}`, `{"map": […]}`) into
/// plain JSON. Values that are already plain pass through unchanged.
pub fn flatten_scval(value: &Value) -> Value {
    match value {
        Value::Object(obj) if obj.len() == 1 => {
            let Some((tag, inner)) = obj.iter().next() else {
                return Value::Object(Map::new());
            };
            match tag.as_str() {
                "vec" => match inner {
                    Value::Array(items) => Value::Array(items.iter().map(flatten_scval).collect()),
                    _ => Value::Array(Vec::new()),
                },
                "map" => {
                    let mut flat = Map::new();
                    for entry in inner.as_array().into_iter().flatten() {
                        let key = entry.get("key").map(flatten_scval);
                        let val = entry.get("val").map(flatten_scval);
                        if let (Some(Value::String(k)), Some(v)) = (key, val) {
                            flat.insert(k, v);
                        }
                    }
                    Value::Object(flat)
                }
                "u32" | "u64" | "i32" | "i64" | "i128" | "u128" | "bool" | "symbol"
                | "string" | "address" | "bytes" => inner.clone(),
                "void" => Value::Null,
                _ => Value::Object(
                    obj.iter()
                        .map(|(k, v)| (k.clone(), flatten_scval(v)))
                        .collect(),
                ),
            }
        }
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), flatten_scval(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(flatten_scval).collect()),
        other => other.clone(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn extract_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find_map(scalar_to_string)
}

fn extract_i64(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Ticket hashes may arrive hex- or base64-encoded; store lowercase hex.
fn normalize_hex(raw: &str) -> String {
    let trimmed = raw.trim_start_matches("0x");
    if trimmed.len() == 64 && hex::decode(trimmed).is_ok() {
        return trimmed.to_ascii_lowercase();
    }
    match base64::engine::general_purpose::STANDARD.decode(raw) {
        Ok(bytes) => hex::encode(bytes),
        Err(_) => raw.to_string(),
    }
}

/// Extract a Soroban Symbol from the topic string.
/// The RPC may return `{"type":"symbol","value":"voted"}`, `{"symbol":"voted"}`
/// or just the raw string.
fn extract_symbol(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
        if let Value::String(s) = flatten_scval(&v) {
            return s;
        }
    }
    raw.to_string()
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
