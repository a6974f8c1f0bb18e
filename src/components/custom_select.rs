use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::Choice;
use crate::interaction::hover::use_hover_target;

#[derive(Properties, PartialEq)]
pub struct CustomSelectProps {
    pub label: AttrValue,
    pub options: Vec<Choice>,
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

/// Dropdown with a floating label. Closes on selection or any click outside it.
#[function_component(CustomSelect)]
pub fn custom_select(props: &CustomSelectProps) -> Html {
    let open = use_state(|| false);
    let node = use_node_ref();
    let trigger = use_node_ref();
    use_hover_target(trigger.clone());

    {
        let open = open.clone();
        use_click_away(node.clone(), move |_: Event| open.set(false));
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let selected = props.options.iter().find(|option| option.value == props.value.as_str());
    let floating = selected.is_some() || *open;

    html! {
        <div ref={node} class={classes!("custom-select", (*open).then(|| "open"))}>
            <div ref={trigger} class="select-trigger" onclick={toggle}>
                <span class={classes!("select-value", selected.is_none().then(|| "empty"))}>
                    { selected.map(|option| option.label.clone()).unwrap_or_else(|| "Sélectionnez".to_string()) }
                </span>
                <span class="select-arrow">{"▼"}</span>
            </div>
            <label class={classes!("field-label", floating.then(|| "floating"))}>{ props.label.clone() }</label>
            <div class="select-menu">
                { for props.options.iter().map(|option| {
                    let on_pick = {
                        let open = open.clone();
                        let on_change = props.on_change.clone();
                        let value = option.value.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_change.emit(value.clone());
                            open.set(false);
                        })
                    };
                    let active = option.value == props.value.as_str();
                    html! {
                        <div key={option.value.clone()} class={classes!("select-option", active.then(|| "active"))} onclick={on_pick}>
                            { option.label.clone() }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
