use anyhow::Result;
use paxconv_core::{parser::parse_kantec, KantecId, PaxtonId};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct Conversion<'a> {
    kantec: &'a str,
    facility: u8,
    card: u16,
    paxton: &'a PaxtonId,
}

pub fn execute(kantec: &str, json: bool) -> Result<PaxtonId> {
    let id: KantecId = parse_kantec(kantec)?;
    debug!("Parsed {} as facility 0x{:02X}, card {}", kantec, id.facility, id.card);

    let paxton = paxconv_core::convert_id(&id);
    println!("{}", format_output(kantec, &id, &paxton, json)?);

    Ok(paxton)
}

/// Text printed for a successful conversion
pub fn format_output(kantec: &str, id: &KantecId, paxton: &PaxtonId, json: bool) -> Result<String> {
    let kantec = kantec.trim();

    if json {
        let out = Conversion {
            kantec,
            facility: id.facility,
            card: id.card,
            paxton,
        };
        Ok(serde_json::to_string_pretty(&out)?)
    } else {
        Ok(format!("Kantec:  {}\nPaxton:  {}", kantec, paxton))
    }
}
