use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SettingInputContainerProps {
    /// Single glyph shown before the label
    pub icon: AttrValue,
    pub label: AttrValue,
    pub html_for: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Label column plus input column, one row of the settings form
#[function_component(SettingInputContainer)]
pub fn setting_input_container(props: &SettingInputContainerProps) -> Html {
    html! {
        <div class="block sm:flex">
            <div class="mb-4 min-w-48 sm:mb-0">
                <label for={props.html_for.clone()} class="flex mt-1 text-sm font-medium text-neutral-700">
                    <span class="mr-1 text-neutral-500">{props.icon.clone()}</span>
                    {props.label.clone()}
                </label>
            </div>
            <div class="w-full">
                {props.children.clone()}
            </div>
        </div>
    }
}
