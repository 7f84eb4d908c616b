use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { margin: 0; background: white; color: black; font-family: Arial, sans-serif; }
header { padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.12); }
.viewer { display: flex; gap: 1.5rem; padding: 1.5rem; align-items: flex-start; }
.sidebar { flex: 0 0 280px; }
.sidebar details { margin-bottom: 0.75rem; border-bottom: 1px solid #e5e7eb; padding-bottom: 0.5rem; }
.sidebar summary { font-weight: bold; cursor: pointer; margin-bottom: 0.5rem; }
.sidebar label { display: block; font-size: 0.9rem; margin-top: 0.5rem; }
.sidebar input, .sidebar select { width: 100%; box-sizing: border-box; padding: 4px; }
.sidebar .range { display: flex; gap: 0.5rem; }
.results { flex: 1; overflow-x: auto; }
.results table { border-collapse: collapse; width: 100%; }
.results th { text-align: left; padding: 8px; border-bottom: 2px solid #e5e7eb; }
.results td { padding: 6px 8px; border-bottom: 1px solid #f3f4f6; }
.green-icon { color: green; font-weight: bold; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { (title) }
                }
                (content)
            }
        }
    }
}
