use crate::core::models::player::Player;
use serde_json::{Value, json};
use tracing::debug;

// Generates Chart.js configuration for visualizing net gains at the table
pub struct Visualization;

impl Visualization {
    /// Generates a Chart.js bar chart of each player's net gain.
    ///
    /// Winners are drawn in teal and losers in red so the chart reads the same
    /// way as the transfer list. An empty roster yields a chart with no bars.
    pub fn net_gain_chart(players: &[Player]) -> Value {
        debug!("Generating net gain chart for {} players", players.len());

        let labels: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        let data: Vec<f64> = players.iter().map(Player::net_gain).collect();

        let mut background_colors = Vec::with_capacity(data.len());
        let mut border_colors = Vec::with_capacity(data.len());
        for net_gain in &data {
            let (r, g, b) = if *net_gain < 0.0 { (255, 99, 132) } else { (75, 192, 192) };
            background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
            border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
        }

        json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Net Gain",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": {
                        "title": {
                            "display": true,
                            "text": "Net Gain ($)"
                        }
                    },
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Players"
                        }
                    }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": "Session Results"
                    }
                }
            }
        })
    }
}
