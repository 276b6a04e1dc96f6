//! # Flight Briefing Commands
//!
//! Handles `/vol_local` and `/trajet`.
//! Both compose METAR, TAF and NOTAM placeholders with a Windy radar link
//! and a flight-type-dependent document footnote into a single message.

use crate::domain::traits::ChatProvider;
use crate::infrastructure::briefing::{
    AEROWEB_HOME_URL, BriefingService, SOFIA_HOME_URL,
};
use crate::strings::messages;
use anyhow::Result;

pub fn vol_local_reply(briefing: &BriefingService, args: &[String]) -> String {
    let (Some(icao), Some(flight_type), Some(date)) = (args.first(), args.get(1), args.get(2))
    else {
        return messages::VOL_LOCAL_USAGE.to_string();
    };
    let icao = icao.to_uppercase();
    let flight_type = flight_type.to_uppercase();

    let mut response = format!("🛩️ **Local flight from {icao}**\n");
    response.push_str(&format!("Type: {flight_type} | Date: {date}\n\n"));
    response.push_str(&format!("**METAR:**\n{}\n\n", briefing.metar(&icao)));
    response.push_str(&format!("**TAF:**\n{}\n\n", briefing.taf(&icao)));
    response.push_str(&format!("**NOTAMs:**\n{}\n\n", briefing.notam(&icao, date)));
    response.push_str(&format!("**Windy radar:**\n{}\n\n", briefing.windy_link()));
    response.push_str(messages::flight_docs_footnote(&flight_type));
    response
}

pub fn trajet_reply(briefing: &BriefingService, args: &[String]) -> String {
    let (Some(departure), Some(arrival), Some(flight_type), Some(date)) =
        (args.first(), args.get(1), args.get(2), args.get(3))
    else {
        return messages::TRAJET_USAGE.to_string();
    };
    let departure = departure.to_uppercase();
    let arrival = arrival.to_uppercase();
    let flight_type = flight_type.to_uppercase();

    let mut response = String::from("✈️ **Route briefing**\n");
    response.push_str(&format!("Type: {flight_type} | Date: {date}\n\n"));
    response.push_str(&airfield_block("DEPARTURE", &departure));
    response.push_str(&airfield_block("ARRIVAL", &arrival));
    response.push_str("**Route & weather:**\n");
    response.push_str(&format!("* Radar: {}\n", briefing.windy_link()));
    response.push_str(&format!("* TEMSI/WINTEM: {AEROWEB_HOME_URL}\n\n"));
    response.push_str(messages::flight_docs_footnote(&flight_type));
    response
}

/// One airfield section of a route briefing. Each code appears exactly once,
/// in the block label; the lines link the service homepages rather than the
/// station pages, which embed the code in their URL.
fn airfield_block(label: &str, icao: &str) -> String {
    format!(
        "**{label} - {icao}:**\n\
         * METAR: Aeroweb ({AEROWEB_HOME_URL})\n\
         * TAF: Aeroweb ({AEROWEB_HOME_URL})\n\
         * NOTAMs: SofiaBriefing ({SOFIA_HOME_URL})\n\n"
    )
}

pub async fn handle_vol_local(
    briefing: &BriefingService,
    chat: &impl ChatProvider,
    args: &[String],
) -> Result<()> {
    chat.send_message(&vol_local_reply(briefing, args))
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_trajet(
    briefing: &BriefingService,
    chat: &impl ChatProvider,
    args: &[String],
) -> Result<()> {
    chat.send_message(&trajet_reply(briefing, args))
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::BriefingConfig;

    fn briefing() -> BriefingService {
        BriefingService::new(BriefingConfig::default()).unwrap()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vol_local_composes_all_blocks() {
        let reply = vol_local_reply(&briefing(), &args(&["LFPG", "VFR", "2025-01-20"]));
        assert!(reply.contains("**METAR:**"));
        assert!(reply.contains("**TAF:**"));
        assert!(reply.contains("**NOTAMs:**"));
        assert!(reply.contains("https://www.windy.com/?48.7,2.3,8"));
        assert!(reply.contains(messages::VFR_DOCS_FOOTNOTE));
        assert!(!reply.contains(messages::IFR_DOCS_FOOTNOTE));
    }

    #[test]
    fn test_vol_local_missing_date_yields_usage() {
        let reply = vol_local_reply(&briefing(), &args(&["LFPG", "VFR"]));
        assert_eq!(reply, messages::VOL_LOCAL_USAGE);
        assert!(!reply.contains("**METAR:**"));
    }

    #[test]
    fn test_vol_local_unknown_type_gets_ifr_docs() {
        let reply = vol_local_reply(&briefing(), &args(&["LFPG", "ZFR", "2025-01-20"]));
        assert!(reply.contains(messages::IFR_DOCS_FOOTNOTE));
    }

    #[test]
    fn test_trajet_codes_appear_once_in_their_blocks() {
        let reply = trajet_reply(&briefing(), &args(&["LFPG", "LFPO", "IFR", "2025-01-20"]));
        assert_eq!(reply.matches("LFPG").count(), 1);
        assert_eq!(reply.matches("LFPO").count(), 1);
        assert!(reply.contains("**DEPARTURE - LFPG:**"));
        assert!(reply.contains("**ARRIVAL - LFPO:**"));
        let dep = reply.find("**DEPARTURE").unwrap();
        let arr = reply.find("**ARRIVAL").unwrap();
        assert!(dep < arr);
    }

    #[test]
    fn test_trajet_contains_footnote_and_route_links() {
        let reply = trajet_reply(&briefing(), &args(&["LFPG", "LFPO", "IFR", "2025-01-20"]));
        assert!(reply.contains(messages::IFR_DOCS_FOOTNOTE));
        assert!(!reply.contains(messages::VFR_DOCS_FOOTNOTE));
        assert!(reply.contains("https://www.windy.com/?48.7,2.3,8"));
        assert!(reply.contains(AEROWEB_HOME_URL));
        assert!(reply.contains("2025-01-20"));
    }

    #[test]
    fn test_trajet_three_args_yields_usage() {
        let reply = trajet_reply(&briefing(), &args(&["LFPG", "LFPO", "IFR"]));
        assert_eq!(reply, messages::TRAJET_USAGE);
        assert!(!reply.contains("**DEPARTURE"));
    }

    #[test]
    fn test_replies_are_idempotent() {
        let b = briefing();
        let local = args(&["LFPG", "VFR", "2025-01-20"]);
        let route = args(&["LFPG", "LFPO", "IFR", "2025-01-20"]);
        assert_eq!(vol_local_reply(&b, &local), vol_local_reply(&b, &local));
        assert_eq!(trajet_reply(&b, &route), trajet_reply(&b, &route));
    }
}
