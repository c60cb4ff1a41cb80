//! WCIF roster client.
//!
//! Fetches the public WCIF (WCA Competition Interchange Format) document for
//! a competition and extracts the entrants registered for one event, ranked
//! by their personal-best average world ranking. Competitors without an
//! official average rank are left off the roster; there is no history to
//! simulate them from anyway.

use super::provider::DataError;
use crate::domain::{Entrant, WcaId};
use serde::Deserialize;
use std::time::Duration;

/// Default roster size: the top 16 seeds by average world ranking.
pub const DEFAULT_ROSTER_SIZE: usize = 16;

#[derive(Debug, Deserialize)]
struct Wcif {
    persons: Vec<WcifPerson>,
}

#[derive(Debug, Deserialize)]
struct WcifPerson {
    name: String,
    #[serde(rename = "wcaId")]
    wca_id: Option<String>,
    registration: Option<WcifRegistration>,
    #[serde(rename = "personalBests", default)]
    personal_bests: Vec<WcifPersonalBest>,
}

#[derive(Debug, Deserialize)]
struct WcifRegistration {
    #[serde(rename = "eventIds")]
    event_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WcifPersonalBest {
    #[serde(rename = "eventId")]
    event_id: String,
    #[serde(rename = "type")]
    result_type: String,
    #[serde(rename = "worldRanking")]
    world_ranking: u64,
}

impl WcifPerson {
    fn average_rank(&self, event: &str) -> Option<u64> {
        self.personal_bests
            .iter()
            .find(|pb| pb.event_id == event && pb.result_type == "average")
            .map(|pb| pb.world_ranking)
    }

    fn is_registered_for(&self, event: &str) -> bool {
        self.registration
            .as_ref()
            .is_some_and(|r| r.event_ids.iter().any(|e| e == event))
    }
}

/// Blocking client for the WCA competitions API.
pub struct RosterClient {
    client: reqwest::blocking::Client,
}

impl RosterClient {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("cubecast/0.1")
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    fn wcif_url(competition_id: &str) -> String {
        format!("https://api.worldcubeassociation.org/competitions/{competition_id}/wcif/public")
    }

    /// Fetch the roster for one event: the top `max_entrants` registered
    /// competitors by average world ranking.
    pub fn fetch_roster(
        &self,
        competition_id: &str,
        event: &str,
        max_entrants: usize,
    ) -> Result<Vec<Entrant>, DataError> {
        let url = Self::wcif_url(competition_id);

        let resp = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DataError::NetworkUnreachable(e.to_string())
            } else {
                DataError::Other(e.to_string())
            }
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::CompetitionNotFound {
                id: competition_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DataError::Other(format!(
                "HTTP {status} fetching WCIF for {competition_id}"
            )));
        }

        let wcif: Wcif = resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!(
                "failed to parse WCIF for {competition_id}: {e}"
            ))
        })?;

        Ok(rank_entrants(wcif, event, max_entrants))
    }
}

impl Default for RosterClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the ranked roster from a parsed WCIF document.
fn rank_entrants(wcif: Wcif, event: &str, max_entrants: usize) -> Vec<Entrant> {
    let mut ranked: Vec<(u64, Entrant)> = wcif
        .persons
        .into_iter()
        .filter(|p| p.is_registered_for(event))
        .filter_map(|p| {
            let rank = p.average_rank(event)?;
            let id = p.wca_id?;
            Some((rank, Entrant::new(WcaId::new(id), p.name)))
        })
        .collect();

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked
        .into_iter()
        .take(max_entrants)
        .map(|(_, entrant)| entrant)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_wcif() -> Wcif {
        serde_json::from_str(
            r#"{
                "persons": [
                    {
                        "name": "Slow Solver",
                        "wcaId": "2015SLOW01",
                        "registration": { "eventIds": ["333", "444"] },
                        "personalBests": [
                            { "eventId": "333", "type": "average", "worldRanking": 900 },
                            { "eventId": "333", "type": "single", "worldRanking": 700 }
                        ]
                    },
                    {
                        "name": "Fast Solver",
                        "wcaId": "2012FAST01",
                        "registration": { "eventIds": ["333"] },
                        "personalBests": [
                            { "eventId": "333", "type": "average", "worldRanking": 12 }
                        ]
                    },
                    {
                        "name": "Not Registered",
                        "wcaId": "2018NOPE01",
                        "registration": null,
                        "personalBests": [
                            { "eventId": "333", "type": "average", "worldRanking": 1 }
                        ]
                    },
                    {
                        "name": "Other Event Only",
                        "wcaId": "2019OTHE01",
                        "registration": { "eventIds": ["444"] },
                        "personalBests": [
                            { "eventId": "444", "type": "average", "worldRanking": 40 }
                        ]
                    },
                    {
                        "name": "First Timer",
                        "wcaId": null,
                        "registration": { "eventIds": ["333"] }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn roster_is_sorted_by_average_rank() {
        let roster = rank_entrants(sample_wcif(), "333", 16);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id.as_str(), "2012FAST01");
        assert_eq!(roster[1].id.as_str(), "2015SLOW01");
    }

    #[test]
    fn unregistered_and_rankless_people_are_skipped() {
        let roster = rank_entrants(sample_wcif(), "333", 16);
        assert!(roster.iter().all(|e| e.id.as_str() != "2018NOPE01"));
        assert!(roster.iter().all(|e| e.id.as_str() != "2019OTHE01"));
    }

    #[test]
    fn roster_is_capped_at_max_entrants() {
        let roster = rank_entrants(sample_wcif(), "333", 1);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id.as_str(), "2012FAST01");
    }

    #[test]
    fn wcif_url_targets_the_public_endpoint() {
        assert_eq!(
            RosterClient::wcif_url("WC2025"),
            "https://api.worldcubeassociation.org/competitions/WC2025/wcif/public"
        );
    }
}
