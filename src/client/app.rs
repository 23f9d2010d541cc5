use super::*;
use crate::game::*;
use leptos::prelude::*;

fn block(visible: bool) -> &'static str {
    match visible {
        true => "block",
        false => "none",
    }
}

fn inline(visible: bool) -> &'static str {
    match visible {
        true => "inline-block",
        false => "none",
    }
}

/// Applies one input, keeping the old game on an illegal transition.
/// Returns whether the game moved.
fn dispatch(game: RwSignal<Game>, input: Input) -> bool {
    match game.with_untracked(|g| g.apply(input)) {
        Ok(next) => {
            game.set(next);
            true
        }
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let game = RwSignal::new(Game::default());
    let screen = Memo::new(move |_| game.with(|g| Screen::from(g)));
    let scene = Memo::new(move |_| game.with(Game::scene));

    Effect::new(move |_| {
        if let Some((_, point)) = scene.get() {
            show(&point);
        }
    });

    let start = move |_| {
        if dispatch(game, Input::Start) {
            leptos::task::spawn_local(async move {
                let fetched = Remote::default().fetch().await;
                match game.with_untracked(|g| g.load(fetched)) {
                    Ok(next) => game.set(next),
                    Err(e) => log::warn!("{}", e),
                }
            });
        }
    };

    view! {
        <main class="litterview">
            <section id="start-screen" style:display=move || block(screen.get().start.visible)>
                <button
                    id="start-button"
                    disabled=move || !screen.get().start.enabled
                    on:click=start
                >
                    {move || screen.get().start.label}
                </button>
                <p class="alert">{move || screen.get().alert.unwrap_or_default()}</p>
            </section>
            <section id="game-container" style:display=move || block(screen.get().playing)>
                <div id="map"></div>
                <p id="progress">{move || screen.get().progress.unwrap_or_default()}</p>
                <div id="game-controls">
                    <button
                        id="yes-button"
                        style:background-color=move || screen.get().positive.color()
                        on:click=move |_| {
                            dispatch(game, Input::Choose(Judgment::Positive));
                        }
                    >
                        "Yes"
                    </button>
                    <button
                        id="no-button"
                        style:background-color=move || screen.get().negative.color()
                        on:click=move |_| {
                            dispatch(game, Input::Choose(Judgment::Negative));
                        }
                    >
                        "No"
                    </button>
                    <button
                        id="next-button"
                        style:display=move || inline(screen.get().proceed)
                        on:click=move |_| {
                            dispatch(game, Input::Proceed);
                        }
                    >
                        "Next"
                    </button>
                </div>
                <p>"Score: " <span id="score">{move || screen.get().score}</span></p>
            </section>
            <section id="end-screen" style:display=move || block(screen.get().summary.is_some())>
                <h2>"Game over"</h2>
                <p>
                    "Final score: "
                    <span id="final-score">{move || screen.get().summary.unwrap_or_default()}</span>
                </p>
                <button
                    id="restart-button"
                    on:click=move |_| {
                        dispatch(game, Input::Restart);
                    }
                >
                    "Restart"
                </button>
            </section>
        </main>
    }
}
