//! # Weather Lookup Commands
//!
//! Handles `/metar`, `/taf` and `/notam`.
//! Each reply references the upstream page for the requested field; too few
//! arguments yields the usage hint instead.

use crate::domain::traits::ChatProvider;
use crate::infrastructure::briefing::BriefingService;
use crate::strings::messages;
use anyhow::Result;

pub fn metar_reply(briefing: &BriefingService, args: &[String]) -> String {
    match args.first() {
        Some(icao) => briefing.metar(&icao.to_uppercase()),
        None => messages::METAR_USAGE.to_string(),
    }
}

pub fn taf_reply(briefing: &BriefingService, args: &[String]) -> String {
    match args.first() {
        Some(icao) => briefing.taf(&icao.to_uppercase()),
        None => messages::TAF_USAGE.to_string(),
    }
}

pub fn notam_reply(briefing: &BriefingService, args: &[String]) -> String {
    match (args.first(), args.get(1)) {
        (Some(icao), Some(date)) => briefing.notam(&icao.to_uppercase(), date),
        _ => messages::NOTAM_USAGE.to_string(),
    }
}

pub async fn handle_metar(
    briefing: &BriefingService,
    chat: &impl ChatProvider,
    args: &[String],
) -> Result<()> {
    let reply = match args.first() {
        // The probe only applies to well-formed invocations
        Some(icao) if briefing.probe_enabled() => briefing.metar_checked(&icao.to_uppercase()).await,
        _ => metar_reply(briefing, args),
    };
    chat.send_message(&reply)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_taf(
    briefing: &BriefingService,
    chat: &impl ChatProvider,
    args: &[String],
) -> Result<()> {
    chat.send_message(&taf_reply(briefing, args))
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_notam(
    briefing: &BriefingService,
    chat: &impl ChatProvider,
    args: &[String],
) -> Result<()> {
    chat.send_message(&notam_reply(briefing, args))
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
