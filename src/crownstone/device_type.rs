/// Renders a Crownstone device type tag the way users see it in the app.
pub fn prettify_device_type(device_type: &str) -> String {
    match device_type {
        "PLUG" => "Crownstone Plug".to_string(),
        "BUILTIN" => "Crownstone Built-in".to_string(),
        "BUILTIN_ONE" => "Crownstone Built-in One".to_string(),
        "GUIDESTONE" => "Guidestone".to_string(),
        "CROWNSTONE_USB" => "Crownstone USB".to_string(),
        "HUB" => "Crownstone Hub".to_string(),
        "" => "Crownstone".to_string(),
        other => title_case(other),
    }
}

fn title_case(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
