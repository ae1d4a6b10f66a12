use crate::utils::nom_helper::{
    Endian, nom_data, nom_unsigned_eight_bytes, nom_unsigned_four_bytes,
};
use log::warn;

pub(crate) struct AssistCounts {
    pub(crate) run_count: u32,
    pub(crate) focus_count: u32,
    pub(crate) filetime: u64,
}

/// Minimum size of the Windows 7+ entry layout
const MODERN_ENTRY_SIZE: usize = 68;
/// Minimum size of the XP-era entry layout
const LEGACY_ENTRY_SIZE: usize = 16;

/// Parse the binary `UserAssist` counters. The layout is determined by payload length,
/// payloads smaller than the XP-era layout are unparseable
pub(crate) fn parse_assist_value(data: &[u8]) -> Option<AssistCounts> {
    let entry_result = if data.len() >= MODERN_ENTRY_SIZE {
        parse_modern_entry(data)
    } else if data.len() >= LEGACY_ENTRY_SIZE {
        parse_legacy_entry(data)
    } else {
        return None;
    };

    match entry_result {
        Ok((_, counts)) => Some(counts),
        Err(_err) => {
            warn!("[userassist] Could not parse userassist value data");
            None
        }
    }
}

/// Windows 7+ layout: run count at offset 4, focus count at offset 8, FILETIME at offset 60
fn parse_modern_entry(data: &[u8]) -> nom::IResult<&[u8], AssistCounts> {
    let (input, _session_id) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (input, run_count) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, focus_count) = nom_unsigned_four_bytes(input, Endian::Le)?;

    // Focus time plus unknown data up to the FILETIME at offset 60
    let unknown_data_size = 48;
    let (input, _unknown) = nom_data(input, unknown_data_size)?;
    let (input, filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;

    Ok((
        input,
        AssistCounts {
            run_count,
            focus_count,
            filetime,
        },
    ))
}

/// XP-era layout: the raw counter at offset 4 starts at five (5), the first five values are
/// session-state markers rather than executions. The FILETIME is the final 8 bytes
fn parse_legacy_entry(data: &[u8]) -> nom::IResult<&[u8], AssistCounts> {
    let (input, _session_id) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (_, raw_count) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let counter_base = 5;
    let marker_max = 4;
    let run_count = if raw_count > marker_max {
        raw_count - counter_base
    } else {
        0
    };

    let filetime_size = 8;
    let (filetime_data, _skipped) = nom_data(data, (data.len() - filetime_size) as u64)?;
    let (input, filetime) = nom_unsigned_eight_bytes(filetime_data, Endian::Le)?;

    Ok((
        input,
        AssistCounts {
            run_count,
            focus_count: 0,
            filetime,
        },
    ))
}

/// The `UserAssist` executable path is ROT13 encoded.
/// It is possible to disable the encoding via a Registry setting
pub(crate) fn rot_decode(rot: &str) -> String {
    let rot_shift = 13;
    rot.chars()
        .map(|c| match c {
            'a'..='m' | 'A'..='M' => ((c as u8) + rot_shift) as char,
            'n'..='z' | 'N'..='Z' => ((c as u8) - rot_shift) as char,
            _ => c,
        })
        .collect()
}
