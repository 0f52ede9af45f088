/// Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::tab_record::TabRecord;

#[derive(Properties, PartialEq)]
pub struct TabRowProps {
    pub tab: TabRecord,
    pub selected: bool,
    pub on_close: Callback<i32>,
    pub on_toggle: Callback<(i32, bool)>,
}

/// One tab: close button, selection checkbox, title link with its host below.
#[function_component(TabRow)]
pub fn tab_row(props: &TabRowProps) -> Html {
    let tab = &props.tab;
    let tab_id = tab.id;

    let on_close = props.on_close.reform(move |_: MouseEvent| tab_id);
    let on_toggle = props.on_toggle.reform(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (tab_id, input.checked())
    });

    html! {
        <tr class="tab-row">
            <td>
                <Button
                    onclick={on_close}
                    variant={ButtonVariant::Danger}
                    size={ButtonSize::Small}
                >
                    {"X"}
                </Button>
            </td>
            <td>
                <div class="checkbox-container">
                    <input
                        type="checkbox"
                        id={format!("tab-{}", tab_id)}
                        checked={props.selected}
                        onchange={on_toggle}
                    />
                </div>
            </td>
            <td>
                <a href={tab.url.clone()} target="_blank">{&tab.title}</a>
                <span class="tab-host">{&tab.host}</span>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabListFooterProps {
    pub tab_count: usize,
    pub host_count: usize,
}

#[function_component(TabListFooter)]
pub fn tab_list_footer(props: &TabListFooterProps) -> Html {
    html! {
        <div class="footer">
            {format!("{} tabs • {} hosts", props.tab_count, props.host_count)}
        </div>
    }
}
