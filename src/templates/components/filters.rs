use crate::filters::{Control, ControlKind, FilterGroup, TriState};
use maud::{html, Markup};

/// Sidebar form whose fields round-trip through `FilterState::from_query`.
pub fn filter_sidebar(controls: &[Control], export_href: &str) -> Markup {
    html! {
        aside class="sidebar" {
            h2 { "Filter Properties" }
            form method="get" action="/" {
                input type="hidden" name="submitted" value="1";

                @for group in FilterGroup::ORDER {
                    @let members: Vec<&Control> = controls.iter().filter(|c| c.group == group).collect();
                    @if !members.is_empty() {
                        details open {
                            summary { (group.title()) }
                            @for control in members {
                                (control_field(control))
                            }
                        }
                    }
                }

                button type="submit" { "Apply filters" }
                " "
                a href="/" { "Reset" }
            }
            p { a href=(export_href) { "Download results (.xlsx)" } }
        }
    }
}

fn control_field(control: &Control) -> Markup {
    match &control.kind {
        ControlKind::Number {
            name,
            min,
            max,
            value,
        } => html! {
            label for=(name) title=[control.tooltip] { (control.label) }
            input type="number" id=(name) name=(name) min=(min) max=[*max] step="1" value=(value);
        },
        ControlKind::Range {
            min_name,
            max_name,
            min,
            max,
            step,
            value: (lo, hi),
        } => html! {
            label for=(min_name) title=[control.tooltip] { (control.label) }
            div class="range" {
                input type="number" id=(min_name) name=(min_name) min=(min) max=(max) step=(step) value=(lo);
                input type="number" name=(max_name) min=(min) max=(max) step=(step) value=(hi);
            }
        },
        ControlKind::MultiSelect {
            name,
            options,
            selected,
        } => html! {
            label for=(name) title=[control.tooltip] { (control.label) }
            select id=(name) name=(name) multiple size=(options.len().clamp(1, 6)) {
                @for option in options {
                    option value=(option) selected[selected.contains(option)] { (option) }
                }
            }
        },
        ControlKind::TriState { name, value } => html! {
            label for=(name) title=[control.tooltip] { (control.label) }
            select id=(name) name=(name) {
                @for state in TriState::ALL {
                    option value=(state) selected[state == *value] { (state) }
                }
            }
        },
    }
}
