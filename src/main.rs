#![windows_subsystem = "windows"]
use dioxus::prelude::*;
use dioxus_stateful::prelude::*;

static TITLE: &str = "Stateful demo";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Answer,
    Failure,
}

async fn async_sleep(timeout_ms: u64) {
    tokio::time::sleep(tokio::time::Duration::from_millis(timeout_ms)).await
}

async fn compute(outcome: Outcome) -> Result<u32, String> {
    async_sleep(1500).await;
    match outcome {
        Outcome::Answer => Ok(42),
        Outcome::Failure => Err("network failure".to_owned()),
    }
}

#[component]
fn Spinner() -> Element {
    log::debug!("Spinner Rendered");
    use_drop(|| log::debug!("Spinner Dropped"));
    rsx! {
        span { class: "loading loading-spinner", "Computing..." }
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    use_stateful_config(DomConfig::new().with_loader_component(Spinner));

    let mut outcome = use_signal(|| Outcome::Answer);
    let mut answer = use_resource(move || compute(outcome()));

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }

        div { id: "app", class: "text-base",
            div { class: "flex gap-2",
                button {
                    class: "btn",
                    onclick: move |_| outcome.set(Outcome::Answer),
                    "Answer"
                }
                button {
                    class: "btn",
                    onclick: move |_| outcome.set(Outcome::Failure),
                    "Fail"
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        answer.restart();
                    },
                    "Restart"
                }
            }
            Stateful {
                state: ResultState::from(answer),
                error_template: move |ctx: StatefulContext<u32, String>| rsx! {
                    span { class: "text-error", "Failed: {ctx.error.unwrap_or_default()}" }
                },
                content: move |ctx: StatefulContext<u32, String>| rsx! {
                    p { "The answer is {ctx.result.unwrap_or_default()}" }
                },
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(800, 600))
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
