//! # Messages
//!
//! Constant strings and format functions for user-facing messages.
//! Includes usage hints, report templates, and footnotes.

pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Try /help.";

pub const METAR_USAGE: &str = "Usage: /metar ICAO (e.g. /metar LFPG)";
pub const TAF_USAGE: &str = "Usage: /taf ICAO (e.g. /taf LFPG)";
pub const NOTAM_USAGE: &str = "Usage: /notam ICAO DATE (e.g. /notam LFPG 2025-01-20)";
pub const VOL_LOCAL_USAGE: &str =
    "Usage: /vol_local ICAO VFR|IFR DATE\nE.g. /vol_local LFPG VFR 2025-01-20";
pub const TRAJET_USAGE: &str =
    "Usage: /trajet ICAO_A ICAO_B VFR|IFR DATE\nE.g. /trajet LFPG LFPO VFR 2025-01-20";

pub fn metar_report(icao: &str, url: &str) -> String {
    format!("METAR for {icao}:\n(see: {url})")
}

pub fn metar_unavailable(icao: &str) -> String {
    format!("Could not retrieve the METAR for {icao}")
}

pub fn taf_report(icao: &str, url: &str) -> String {
    format!("TAF for {icao}:\n(see: {url})")
}

pub fn notam_report(icao: &str, date: &str, url: &str) -> String {
    format!("NOTAMs for {icao} on {date}:\n{url}")
}

pub fn lookup_error(err: &str) -> String {
    format!("Error: {err}")
}

pub const VFR_DOCS_FOOTNOTE: &str = "📋 **VFR docs:** TEMSI and WINTEM available on Aeroweb";
pub const IFR_DOCS_FOOTNOTE: &str = "📋 **IFR docs:** TEMSI, WINTEM and en-route charts";

/// Pick the document footnote for a flight type. Anything other than `VFR`
/// gets the IFR footnote, matching the loose convention of the commands.
pub fn flight_docs_footnote(flight_type: &str) -> &'static str {
    if flight_type == "VFR" {
        VFR_DOCS_FOOTNOTE
    } else {
        IFR_DOCS_FOOTNOTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footnote_selection() {
        assert_eq!(flight_docs_footnote("VFR"), VFR_DOCS_FOOTNOTE);
        assert_eq!(flight_docs_footnote("IFR"), IFR_DOCS_FOOTNOTE);
        // Free-form flight types fall through to the IFR docs
        assert_eq!(flight_docs_footnote("SVFR"), IFR_DOCS_FOOTNOTE);
    }

    #[test]
    fn test_footnotes_are_distinct() {
        assert!(!VFR_DOCS_FOOTNOTE.contains(IFR_DOCS_FOOTNOTE));
        assert!(!IFR_DOCS_FOOTNOTE.contains(VFR_DOCS_FOOTNOTE));
    }
}
