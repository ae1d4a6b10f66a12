/**
 * Logon and logoff events from the Security event log (Security.evtx), typically at
 * C:\Windows\System32\winevt\Logs. Only event IDs 4624, 4625, 4634, and 4647 are kept.
 *
 * This parser uses the `evtx` crate to parse the log file
 *  `https://github.com/omerbenamram/EVTX`
 */
use super::error::LogonError;
use crate::utils::time::unixepoch_ms_to_iso;
use common::windows::{EventLogRecord, LogonEvent};
use evtx::EvtxParser;
use log::{error, info, warn};
use serde_json::Value;

const LOGON_FILTER: [u64; 4] = [4624, 4625, 4634, 4647];
const MAX_LOGON_EVENTS: usize = 1000;

/// Parse logon activity from the Security event log at provided path
pub fn grab_logon_events(path: &str) -> Result<Vec<LogonEvent>, LogonError> {
    let evt_parser_results = EvtxParser::from_path(path);
    let mut evt_parser = match evt_parser_results {
        Ok(result) => result,
        Err(err) => {
            error!("[logons] Failed to open event log {path}, error: {err:?}");
            return Err(LogonError::Parser);
        }
    };

    let records = evt_parser.records_json_value().filter_map(|record| match record {
        Ok(data) => Some(EventLogRecord {
            event_record_id: data.event_record_id,
            timestamp: data.timestamp.timestamp_nanos_opt().unwrap_or_default(),
            data: data.data,
        }),
        Err(err) => {
            warn!("[logons] Issue parsing record from {path}, error: {err:?}");
            None
        }
    });

    Ok(filter_logon_events(records))
}

/// Reduce raw Security log records to logon activity. Emission stops at the cap,
/// scanning continues so the logged totals stay accurate
pub fn filter_logon_events(records: impl IntoIterator<Item = EventLogRecord>) -> Vec<LogonEvent> {
    let mut events: Vec<LogonEvent> = Vec::new();
    let mut scanned = 0;

    for record in records {
        scanned += 1;
        let event_id = match get_event_id(&record.data) {
            Some(result) => result,
            None => continue,
        };
        if !LOGON_FILTER.contains(&event_id) {
            continue;
        }
        if events.len() >= MAX_LOGON_EVENTS {
            continue;
        }

        let logon_type = match event_data_string(&record.data, "LogonType") {
            Some(code) if !code.is_empty() => logon_type_description(&code),
            _ => String::from("N/A"),
        };
        let username = event_data_string(&record.data, "TargetUserName")
            .filter(|name| !name.is_empty())
            .or_else(|| event_data_string(&record.data, "SubjectUserName"))
            .unwrap_or_else(|| String::from("N/A"));
        let source_ip = event_data_string(&record.data, "IpAddress")
            .unwrap_or_else(|| String::from("N/A"));

        let nanos_per_ms = 1_000_000;
        events.push(LogonEvent {
            timestamp: unixepoch_ms_to_iso(&(record.timestamp / nanos_per_ms)),
            event: event_description(event_id),
            username,
            logon_type,
            source_ip,
        });
    }

    info!(
        "[logons] Scanned {scanned} records, matched {} logon events",
        events.len()
    );
    events
}

/// `EventID` is either a plain number or an object with a `#text` member depending on
/// how the record was templated
fn get_event_id(data: &Value) -> Option<u64> {
    let event_id = &data["Event"]["System"]["EventID"];
    if let Some(id) = event_id.as_u64() {
        return Some(id);
    }
    if let Some(id) = event_id["#text"].as_u64() {
        return Some(id);
    }
    event_id.as_str().and_then(|id| id.parse().ok())
}

fn event_data_string(data: &Value, field: &str) -> Option<String> {
    let value = &data["Event"]["EventData"][field];
    if let Some(text) = value.as_str() {
        return Some(text.to_string());
    }
    value.as_u64().map(|number| number.to_string())
}

fn event_description(event_id: u64) -> String {
    match event_id {
        4624 => String::from("(4624) Successful Logon"),
        4625 => String::from("(4625) Failed Logon Attempt"),
        4634 => String::from("(4634) Logoff"),
        4647 => String::from("(4647) User Initiated Logoff"),
        _ => format!("Event {event_id}"),
    }
}

fn logon_type_description(code: &str) -> String {
    let description = match code {
        "0" => "System",
        "2" => "Interactive",
        "3" => "Network",
        "4" => "Batch",
        "5" => "Service",
        "7" => "Unlock",
        "8" => "NetworkCleartext",
        "9" => "NewCredentials",
        "10" => "RemoteInteractive (RDP)",
        "11" => "CachedInteractive",
        _ => return format!("({code})"),
    };
    format!("({code}) {description}")
}

#[cfg(test)]
mod tests {
    use super::{filter_logon_events, get_event_id, grab_logon_events, logon_type_description};
    use common::windows::EventLogRecord;
    use serde_json::{json, Value};

    const NANOS_2022: i64 = 1654079400500000000;

    fn logon_record(event_id: u64, event_data: Value) -> EventLogRecord {
        EventLogRecord {
            event_record_id: 1,
            timestamp: NANOS_2022,
            data: json!({
                "Event": {
                    "System": {"EventID": event_id},
                    "EventData": event_data,
                }
            }),
        }
    }

    #[test]
    fn test_filter_logon_events() {
        let record = logon_record(
            4624,
            json!({
                "TargetUserName": "analyst",
                "LogonType": "2",
                "IpAddress": "10.0.0.5",
            }),
        );

        let results = filter_logon_events(vec![record]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].event, "(4624) Successful Logon");
        assert_eq!(results[0].username, "analyst");
        assert_eq!(results[0].logon_type, "(2) Interactive");
        assert_eq!(results[0].source_ip, "10.0.0.5");
        assert_eq!(results[0].timestamp, "2022-06-01T10:30:00.500Z");
    }

    #[test]
    fn test_filter_logon_events_drops_other_event_ids() {
        let records = vec![
            logon_record(4688, json!({"TargetUserName": "analyst"})),
            logon_record(4647, json!({"TargetUserName": "analyst"})),
        ];

        let results = filter_logon_events(records);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].event, "(4647) User Initiated Logoff");
    }

    #[test]
    fn test_filter_logon_events_subject_fallback() {
        let record = logon_record(
            4634,
            json!({
                "TargetUserName": "",
                "SubjectUserName": "SYSTEM",
            }),
        );

        let results = filter_logon_events(vec![record]);
        assert_eq!(results[0].username, "SYSTEM");
        assert_eq!(results[0].logon_type, "N/A");
        assert_eq!(results[0].source_ip, "N/A");
    }

    #[test]
    fn test_filter_logon_events_numeric_logon_type() {
        let record = logon_record(4624, json!({"LogonType": 10}));

        let results = filter_logon_events(vec![record]);
        assert_eq!(results[0].logon_type, "(10) RemoteInteractive (RDP)");
        assert_eq!(results[0].username, "N/A");
    }

    #[test]
    fn test_filter_logon_events_unknown_logon_type() {
        let record = logon_record(4625, json!({"LogonType": "13"}));

        let results = filter_logon_events(vec![record]);
        assert_eq!(results[0].event, "(4625) Failed Logon Attempt");
        assert_eq!(results[0].logon_type, "(13)");
    }

    #[test]
    fn test_filter_logon_events_cap() {
        let records: Vec<EventLogRecord> = (0..1500)
            .map(|_| logon_record(4624, json!({"TargetUserName": "analyst"})))
            .collect();

        let results = filter_logon_events(records);
        assert_eq!(results.len(), 1000);
    }

    #[test]
    fn test_filter_logon_events_skips_records_without_event_id() {
        let record = EventLogRecord {
            event_record_id: 2,
            timestamp: NANOS_2022,
            data: json!({"Event": {"System": {}}}),
        };

        let results = filter_logon_events(vec![record]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_get_event_id_text_form() {
        let data = json!({"Event": {"System": {"EventID": {"#text": 4624}}}});
        assert_eq!(get_event_id(&data), Some(4624));

        let data = json!({"Event": {"System": {"EventID": "4634"}}});
        assert_eq!(get_event_id(&data), Some(4634));
    }

    #[test]
    fn test_logon_type_description() {
        assert_eq!(logon_type_description("3"), "(3) Network");
        assert_eq!(logon_type_description("5"), "(5) Service");
    }

    #[test]
    #[should_panic(expected = "Parser")]
    fn test_grab_logon_events_bad_path() {
        grab_logon_events("madeup").unwrap();
    }
}
