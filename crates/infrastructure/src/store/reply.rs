//! Decoding of multi-field replies (SLOWLOG, LATENCY, WITHSCORES) into
//! domain types. Missing or malformed fields drop the entry instead of
//! failing the whole reply.

use keyscope_domain::{LatencyEvent, ScoredMember, SlowLogEntry};
use redis::{from_redis_value, FromRedisValue, Value};
use tracing::debug;

fn field<T: FromRedisValue>(fields: &[Value], idx: usize) -> Option<T> {
    fields.get(idx).and_then(|v| from_redis_value(v).ok())
}

pub(crate) fn lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Keys that are not valid UTF-8 are skipped: a lossy copy would name a
/// different key on the follow-up TTL/TYPE/MEMORY USAGE calls.
pub(crate) fn scan_keys(keys: Vec<Vec<u8>>) -> Vec<String> {
    keys.into_iter()
        .filter_map(|bytes| match String::from_utf8(bytes) {
            Ok(key) => Some(key),
            Err(e) => {
                debug!(
                    key = %String::from_utf8_lossy(e.as_bytes()),
                    "Skipping non UTF-8 key from SCAN"
                );
                None
            }
        })
        .collect()
}

/// `[id, timestamp, duration, [args...], addr?, name?]`; the last two fields
/// only exist on servers >= 4.0.
pub(crate) fn slowlog_entry(value: &Value) -> Option<SlowLogEntry> {
    let Value::Array(fields) = value else {
        return None;
    };
    let fields = fields.as_slice();
    let command: Vec<Vec<u8>> = field(fields, 3)?;

    Some(SlowLogEntry {
        id: field(fields, 0)?,
        timestamp: field(fields, 1)?,
        duration_micros: field(fields, 2)?,
        command: command.into_iter().map(lossy).collect(),
        client_addr: field::<String>(fields, 4).filter(|s| !s.is_empty()),
        client_name: field::<String>(fields, 5).filter(|s| !s.is_empty()),
    })
}

/// `[event, timestamp, latest_ms, max_ms, ...]`
pub(crate) fn latency_event(value: &Value) -> Option<LatencyEvent> {
    let Value::Array(fields) = value else {
        return None;
    };

    Some(LatencyEvent {
        event: field(fields, 0)?,
        timestamp: field(fields, 1)?,
        latest_ms: field(fields, 2)?,
        max_ms: field(fields, 3)?,
    })
}

/// Flat `member, score, member, score, ...` as returned by `ZRANGE .. WITHSCORES`
/// under RESP2, or nested pairs under RESP3.
pub(crate) fn scored_members(values: Vec<Value>) -> Vec<ScoredMember> {
    let nested = matches!(values.first(), Some(Value::Array(_)));

    let pairs: Vec<(Option<Vec<u8>>, Option<f64>)> = if nested {
        values
            .iter()
            .filter_map(|v| match v {
                Value::Array(pair) => Some((field(pair, 0), field(pair, 1))),
                _ => None,
            })
            .collect()
    } else {
        values
            .chunks(2)
            .map(|pair| (field(pair, 0), field(pair, 1)))
            .collect()
    };

    pairs
        .into_iter()
        .filter_map(|(member, score)| {
            Some(ScoredMember {
                member: lossy(member?),
                score: score?,
            })
        })
        .collect()
}
