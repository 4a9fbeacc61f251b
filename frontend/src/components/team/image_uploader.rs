use gloo::file::callbacks::{read_as_data_url, FileReader};
use gloo::file::File;
use log::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageUploaderProps {
    pub id: AttrValue,
    pub button_msg: AttrValue,
    #[prop_or_default]
    pub image_src: Option<AttrValue>,
    /// Receives the chosen image as a data URL
    pub on_change: Callback<String>,
}

/// File picker that hands the selected image back as a data URL
#[function_component(ImageUploader)]
pub fn image_uploader(props: &ImageUploaderProps) -> Html {
    // The reader must outlive the change handler or the read is cancelled.
    let reader = use_mut_ref(|| None::<FileReader>);

    let on_file = {
        let reader = reader.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let file = File::from(file);
            debug!("Reading logo {} ({} bytes)", file.name(), file.size());
            let on_change = on_change.clone();
            *reader.borrow_mut() = Some(read_as_data_url(&file, move |result| match result {
                Ok(data_url) => on_change.emit(data_url),
                Err(e) => error!("Failed to read logo file: {}", e),
            }));

            // Allow picking the same file again after a removal.
            input.set_value("");
        })
    };

    html! {
        <div class="flex items-center">
            if let Some(src) = props.image_src.clone() {
                <img src={src} alt="" class="h-10 w-10 mr-2 rounded-sm object-cover" />
            }
            <label
                for={props.id.clone()}
                class="cursor-pointer rounded-sm border border-gray-300 bg-white px-3 py-1 text-xs font-medium text-gray-700 hover:bg-gray-50"
            >
                {props.button_msg.clone()}
            </label>
            <input
                id={props.id.clone()}
                type="file"
                accept="image/*"
                class="hidden"
                onchange={on_file}
            />
        </div>
    }
}
