//! Worker threads drive a shared task tree while [`RedrawLoop`] repaints it.
//!
//! The loop owns nothing but a handle to the tree: workers mutate tasks
//! behind the lock, each tick renders whatever state they have reached.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tasklight::{LogUpdate, RedrawLoop, RenderOptions, Task, TaskStatus};

fn main() {
    let tasks = Arc::new(RwLock::new(vec![
        Task::new("fetch sources"),
        Task::new("build")
            .subtask(Task::new("compile core"))
            .subtask(Task::new("compile cli")),
        Task::new("publish"),
    ]));

    let mut ui = RedrawLoop::new(tasks.clone(), LogUpdate::stderr(), RenderOptions::default())
        .interval(Duration::from_millis(80));
    ui.start();

    let fetcher = {
        let tasks = tasks.clone();
        std::thread::spawn(move || {
            for step in ["resolving mirrors", "downloading tarball", "verifying checksum"] {
                tasks.write().unwrap()[0].set_output(step);
                sleep(400);
            }
            tasks.write().unwrap()[0].set_status(TaskStatus::Completed);
        })
    };

    for i in 0..2 {
        for step in ["parsing", "type checking", "codegen"] {
            tasks.write().unwrap()[1].subtasks_mut()[i].set_output(step);
            sleep(300);
        }
        tasks.write().unwrap()[1].subtasks_mut()[i].set_status(TaskStatus::Completed);
    }
    tasks.write().unwrap()[1].set_status(TaskStatus::Completed);

    fetcher.join().unwrap();

    {
        let mut tasks = tasks.write().unwrap();
        tasks[2].set_output("no credentials, dry run");
        tasks[2].set_status(TaskStatus::Skipped);
    }

    ui.stop(false);
}

fn sleep(ms: u64) {
    std::thread::sleep(Duration::from_millis(ms));
}
