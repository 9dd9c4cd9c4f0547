//! Async runners feeding the same shared tree.
//!
//! The redraw loop keeps its own thread and fixed cadence; tokio tasks
//! just mutate state between ticks. Nothing here awaits the renderer.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tasklight::{LogUpdate, RedrawLoop, RenderOptions, Task, TaskStatus};
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    let tasks = Arc::new(RwLock::new(vec![
        Task::new("warm caches"),
        Task::new("deploy")
            .subtask(Task::new("staging"))
            .subtask(Task::new("production")),
    ]));

    let mut ui = RedrawLoop::new(tasks.clone(), LogUpdate::stderr(), RenderOptions::default())
        .interval(Duration::from_millis(80));
    ui.start();

    let warm = {
        let tasks = tasks.clone();
        tokio::spawn(async move {
            for region in ["us-east", "eu-west", "ap-south"] {
                tasks.write().unwrap()[0].set_output(format!("priming {region}"));
                sleep(Duration::from_millis(500)).await;
            }
            tasks.write().unwrap()[0].set_status(TaskStatus::Completed);
        })
    };

    let deploy = {
        let tasks = tasks.clone();
        tokio::spawn(async move {
            for env in 0..2 {
                for step in ["preflight checks", "swapping containers", "health check"] {
                    tasks.write().unwrap()[1].subtasks_mut()[env].set_output(step);
                    sleep(Duration::from_millis(400)).await;
                }
                tasks.write().unwrap()[1].subtasks_mut()[env].set_status(TaskStatus::Completed);
            }
            tasks.write().unwrap()[1].set_status(TaskStatus::Completed);
        })
    };

    let (a, b) = tokio::join!(warm, deploy);
    let failed = a.is_err() || b.is_err();

    ui.stop(failed);
}
