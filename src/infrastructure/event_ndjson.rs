use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphBuilt { vertices, edges } => {
            json!({"type":"graph_built","vertices":vertices,"edges":edges})
        }
        AppEvent::EulerianSolved { outcome } => {
            json!({"type":"eulerian_solved","outcome":outcome})
        }
        AppEvent::HamiltonianFound {
            index,
            vertices,
            cycle,
        } => {
            json!({"type":"hamiltonian_found","index":index,"vertices":vertices,"cycle":cycle})
        }
        AppEvent::HamiltonianBudgetExhausted {
            collected,
            elapsed_ms,
        } => {
            json!({"type":"hamiltonian_budget_exhausted","collected":collected,"elapsed_ms":elapsed_ms})
        }
        AppEvent::HeuristicSolved { start, outcome } => {
            json!({"type":"heuristic_solved","start":start,"outcome":outcome})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
