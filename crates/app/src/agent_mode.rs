//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! Each `estimate` command fills the calculator form, fires the recompute
//! trigger and runs one app update, so scripted runs go through the same
//! systems as the window. See [`estimator::agent_protocol`] for the schema.

use std::io::{BufRead, Write};

use bevy::log::LogPlugin;
use bevy::prelude::*;

use estimator::agent_protocol::{
    make_response, AgentCommand, AgentResponse, CategoryInfo, EstimateReport, ResponsePayload,
    WeightField, PROTOCOL_VERSION,
};
use estimator::reward_estimator::{CalculatorForm, LatestEstimate, RecomputeEstimate};

pub fn run_agent_mode() {
    // -- Minimal Bevy App: estimator only, logs on stderr --------------------
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    app.add_plugins(estimator::EstimatorPlugin);

    // Initial update so Startup systems run and the eager estimate exists.
    app.update();

    // -- I/O setup -----------------------------------------------------------
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    if write_response(&mut stdout, &make_response(ResponsePayload::Ready)).is_err() {
        return;
    }
    info!("waste-reward agent mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    // -- Main command loop ---------------------------------------------------
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<AgentCommand>(&line) {
            Ok(cmd) => process_command(cmd, &mut app),
            Err(e) => {
                warn!("Rejected agent command: {e}");
                make_response(ResponsePayload::Error {
                    message: format!("Parse error: {e}"),
                })
            }
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        if let Err(e) = write_response(&mut stdout, &response) {
            error!("stdout write error: {e}");
            break;
        }
        if is_goodbye {
            break;
        }
    }

    info!("waste-reward agent mode shutting down");
}

fn write_response(out: &mut impl Write, response: &AgentResponse) -> std::io::Result<()> {
    let json = serde_json::to_string(response).map_err(std::io::Error::other)?;
    writeln!(out, "{json}")?;
    out.flush()
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    match cmd {
        AgentCommand::Estimate {
            category,
            weight,
            household_size,
        } => {
            fill_form(app, category, &weight, household_size);
            app.world_mut().send_event(RecomputeEstimate);
            app.update();

            let latest = app.world().resource::<LatestEstimate>();
            make_response(ResponsePayload::Estimate(EstimateReport::new(
                &latest.estimate,
                household_size,
            )))
        }

        AgentCommand::Categories => make_response(ResponsePayload::Categories {
            categories: CategoryInfo::all(),
        }),

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

fn fill_form(app: &mut App, category: String, weight: &WeightField, household_size: Option<u32>) {
    let mut form = app.world_mut().resource_mut::<CalculatorForm>();
    form.category_label = category;
    form.weight_text = weight.as_form_text();
    if let Some(size) = household_size {
        form.household_size = size;
    }
}
