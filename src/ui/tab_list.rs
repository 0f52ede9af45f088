/// Stocked tabs page: filter, close and reopen tabs grouped by host

use std::collections::HashSet;
use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::browser::ChromeBrowser;
use crate::config::ViewConfig;
use crate::controller::TabListController;
use crate::error::HostError;
use crate::host::host_counts;
use crate::ui::components::{TabListFooter, TabRow};

const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear all stored tabs?";

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
    Busy(String),
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct TabListProps {
    #[prop_or_default]
    pub config: ViewConfig,
}

#[function_component(TabList)]
pub fn tab_list(props: &TabListProps) -> Html {
    let state = use_state(|| ViewState::Loading);
    let selection = use_state(HashSet::<i32>::new);
    let filter_text = use_state(String::new);
    let refresh = use_force_update();
    let controller = use_memo(props.config.clone(), |config| {
        TabListController::new(Rc::new(ChromeBrowser), config.clone())
    });

    // Reconcile stored and live tabs on mount
    {
        let state = state.clone();
        let refresh = refresh.clone();
        let controller = controller.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match controller.load().await {
                    Ok(_) => {
                        refresh.force_update();
                        state.set(ViewState::Idle);
                    }
                    Err(e) => {
                        log::error!("Failed to load tabs: {}", e);
                        state.set(ViewState::Error(format!("Failed to load tabs: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    // Filter handler
    let on_filter_input = {
        let filter_text = filter_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                filter_text.set(input.value());
            }
        })
    };

    // Row checkbox handler
    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |(tab_id, checked): (i32, bool)| {
            let mut new_selection = (*selection).clone();
            if checked {
                new_selection.insert(tab_id);
            } else {
                new_selection.remove(&tab_id);
            }
            selection.set(new_selection);
        })
    };

    // Close a single tab; leaves the status alone unless it fails
    let on_close = {
        let selection = selection.clone();
        let state = state.clone();
        let refresh = refresh.clone();
        let controller = controller.clone();

        Callback::from(move |tab_id: i32| {
            let mut new_selection = (*selection).clone();
            if new_selection.remove(&tab_id) {
                selection.set(new_selection);
            }

            let state = state.clone();
            let refresh = refresh.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let result = controller.close_one(tab_id).await;
                refresh.force_update();
                if let Err(e) = result {
                    state.set(ViewState::Error(format!("Failed to save: {}", e)));
                }
            });
        })
    };

    // Close every other tab in this window
    let on_close_inactive = {
        let state = state.clone();
        let refresh = refresh.clone();
        let controller = controller.clone();

        Callback::from(move |_| {
            let state = state.clone();
            let refresh = refresh.clone();
            let controller = controller.clone();

            state.set(ViewState::Busy("Closing tabs...".to_string()));
            spawn_local(async move {
                let result = controller.close_inactive().await;
                refresh.force_update();
                if let Ok(closed) = &result {
                    log::info!("Closed {} tabs", closed);
                }
                report(&state, result.map(|_| ()), "Failed to close tabs");
            });
        })
    };

    // Clear all stored tabs
    let on_clear = {
        let selection = selection.clone();
        let state = state.clone();
        let refresh = refresh.clone();
        let controller = controller.clone();

        Callback::from(move |_| {
            if !confirm(CLEAR_CONFIRMATION) {
                return;
            }

            let selection = selection.clone();
            let state = state.clone();
            let refresh = refresh.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let result = controller.clear_storage().await;
                if result.is_ok() {
                    selection.set(HashSet::new());
                }
                refresh.force_update();
                report(&state, result, "Failed to clear storage");
            });
        })
    };

    // Open every tab in a new window
    let on_open_all = {
        let state = state.clone();
        let controller = controller.clone();

        Callback::from(move |_| {
            let state = state.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let result = controller.open_all().await;
                report(&state, result.map(|_| ()), "Failed to open window");
            });
        })
    };

    // Open the checked rows the filter shows in a new window
    let on_open_selected = {
        let selection = selection.clone();
        let filter_text = filter_text.clone();
        let state = state.clone();
        let controller = controller.clone();

        Callback::from(move |_| {
            let mut chosen = (*selection).clone();
            let query = (*filter_text).clone();
            selection.set(HashSet::new());

            let state = state.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let result = controller.open_selected(&mut chosen, &query).await;
                report(&state, result.map(|_| ()), "Failed to open window");
            });
        })
    };

    let (visible, tab_count, host_count, selected_count) = {
        let working_set = controller.working_set();
        (
            working_set.filtered(&filter_text),
            working_set.len(),
            host_counts(working_set.tabs()).len(),
            working_set.selected_count(&selection, &filter_text),
        )
    };
    let is_busy = matches!(*state, ViewState::Loading | ViewState::Busy(_));

    html! {
        <div class="container">
            <div class="header">
                <h1 class="main-title">{"Stocked Tabs"}</h1>
            </div>

            // Status display
            {match &*state {
                ViewState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading tabs..."}</p>
                    </div>
                },
                ViewState::Busy(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                ViewState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                ViewState::Idle => html! {}
            }}

            // Filter bar
            <div class="search-container">
                <input
                    type="text"
                    id="filterInput"
                    placeholder="Filter by title or URL..."
                    value={(*filter_text).clone()}
                    oninput={on_filter_input}
                    class="search-input"
                />
            </div>

            // Bulk actions
            <div class="actions">
                <Button onclick={on_clear} disabled={is_busy} variant={ButtonVariant::Danger}>
                    {"Clear Storage"}
                </Button>
                <Button onclick={on_close_inactive} disabled={is_busy} variant={ButtonVariant::Secondary}>
                    {"Close All Other Tabs"}
                </Button>
                <Button onclick={on_open_all} disabled={is_busy} variant={ButtonVariant::Secondary}>
                    {"Open All Tabs"}
                </Button>
                <Button onclick={on_open_selected} disabled={is_busy} variant={ButtonVariant::Primary}>
                    {format!("Open Selected Tabs ({})", selected_count)}
                </Button>
            </div>

            // Tab list
            if visible.is_empty() {
                <div class="empty-state">
                    if filter_text.is_empty() {
                        <p>{"No stocked tabs."}</p>
                    } else {
                        <p>{"No tabs match your filter."}</p>
                    }
                </div>
            } else {
                <table id="tabList" class="tab-list">
                    <tbody>
                        {for visible.iter().map(|tab| html! {
                            <TabRow
                                key={tab.id.to_string()}
                                tab={tab.clone()}
                                selected={selection.contains(&tab.id)}
                                on_close={on_close.clone()}
                                on_toggle={on_toggle.clone()}
                            />
                        })}
                    </tbody>
                </table>
            }

            <TabListFooter tab_count={tab_count} host_count={host_count} />
        </div>
    }
}

// Helper functions

fn report(state: &UseStateHandle<ViewState>, result: Result<(), HostError>, context: &str) {
    match result {
        Ok(()) => state.set(ViewState::Idle),
        Err(e) => state.set(ViewState::Error(format!("{}: {}", context, e))),
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
