//! # Briefing Service
//!
//! Builds lookup URLs and placeholder report strings for the aviation
//! briefing sources (Aeroweb for METAR/TAF, SofiaBriefing for NOTAMs,
//! Windy for the radar). Report parsing is intentionally not implemented:
//! every report references the upstream page instead of a decoded result.

use crate::domain::config::BriefingConfig;
use crate::strings::messages;
use anyhow::{Context, Result};
use std::time::Duration;

pub const AEROWEB_STATION_URL: &str = "https://aviation.meteo.fr/FR/aviation/SAT.php";
pub const AEROWEB_HOME_URL: &str = "https://aviation.meteo.fr";
pub const SOFIA_NOTAM_URL: &str = "https://www.sofia-briefing.com/notam";
pub const SOFIA_HOME_URL: &str = "https://www.sofia-briefing.com";
pub const WINDY_HOME_URL: &str = "https://www.windy.com";

pub struct BriefingService {
    config: BriefingConfig,
    http: reqwest::Client,
}

impl BriefingService {
    pub fn new(config: BriefingConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.probe_timeout))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { config, http })
    }

    pub fn probe_enabled(&self) -> bool {
        self.config.probe_metar
    }

    /// Aeroweb station page carrying both METAR and TAF for a field.
    pub fn station_url(&self, icao: &str) -> String {
        format!("{AEROWEB_STATION_URL}?icao={icao}")
    }

    pub fn notam_url(&self, icao: &str) -> String {
        format!("{SOFIA_NOTAM_URL}/{icao}")
    }

    /// Radar link centered on the configured coordinates, zoom level 8.
    pub fn windy_link(&self) -> String {
        format!(
            "{WINDY_HOME_URL}/?{},{},8",
            self.config.radar_lat, self.config.radar_lon
        )
    }

    pub fn metar(&self, icao: &str) -> String {
        messages::metar_report(icao, &self.station_url(icao))
    }

    pub fn taf(&self, icao: &str) -> String {
        messages::taf_report(icao, &self.station_url(icao))
    }

    pub fn notam(&self, icao: &str, date: &str) -> String {
        messages::notam_report(icao, date, &self.notam_url(icao))
    }

    /// Like [`metar`](Self::metar), but checks that the Aeroweb station page
    /// answers before replying. Only used when `briefing.probe_metar` is set;
    /// a failed probe turns into an error-describing reply, never an error.
    pub async fn metar_checked(&self, icao: &str) -> String {
        if !self.config.probe_metar {
            return self.metar(icao);
        }
        match self.http.get(self.station_url(icao)).send().await {
            Ok(resp) if resp.status().is_success() => self.metar(icao),
            Ok(_) => messages::metar_unavailable(icao),
            Err(e) => messages::lookup_error(&e.to_string()),
        }
    }
}
