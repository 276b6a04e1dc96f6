//! # Help Text
//!
//! Welcome and usage guide messages.
//! Displayed to the user via the `/start` and `/help` commands.

pub const WELCOME: &str = concat!(
    "✈️ **Welcome to your Aviation Weather Assistant** ✈️\n",
    "\n",
    "I can provide:\n",
    "* METAR & TAF (Aeroweb, Meteo-France)\n",
    "* TEMSI & WINTEM charts\n",
    "* NOTAMs (SofiaBriefing)\n",
    "* Weather radar (Windy)\n",
    "\n",
    "**Available commands:**\n",
    "* /vol_local: local flight from one field\n",
    "* /trajet: flight between two fields (A → B)\n",
    "* /metar ICAO: METAR for a field\n",
    "* /taf ICAO: TAF for a field\n",
    "* /notam ICAO DATE: NOTAMs (e.g. /notam LFPG 2025-01-20)\n",
    "* /help: usage guide\n",
    "\n",
    "Flight type: VFR or IFR?\n"
);

pub const MAIN: &str = concat!(
    "📖 **Usage Guide**\n",
    "\n",
    "**Local flight:**\n",
    "`/vol_local LFPG VFR 2025-01-20`\n",
    "METAR, TAF, NOTAMs and radar for a local flight\n",
    "\n",
    "**Route A → B:**\n",
    "`/trajet LFPG LFPO VFR 2025-01-20`\n",
    "Weather for the departure, the arrival and the route\n",
    "\n",
    "**Quick commands:**\n",
    "`/metar LFPG`: METAR only\n",
    "`/taf LFPG`: TAF only\n",
    "`/notam LFPG 2025-01-20`: NOTAMs\n",
    "\n",
    "**Format:**\n",
    "* ICAO code: 4 letters (e.g. LFPG)\n",
    "* Flight type: VFR or IFR\n",
    "* Date: YYYY-MM-DD\n"
);
