use crate::filters::Control;
use crate::templates::components::{filter_sidebar, results_table};
use crate::templates::desktop_layout;
use crate::view::FilteredView;
use maud::{html, Markup};

pub struct ViewerVm<'a> {
    pub title: &'a str,
    pub controls: Vec<Control>,
    pub view: FilteredView<'a>,
    pub export_href: String,
    pub tooltips: bool,
}

pub fn viewer_page(vm: &ViewerVm<'_>) -> Markup {
    desktop_layout(
        vm.title,
        html! {
            main class="viewer" {
                (filter_sidebar(&vm.controls, &vm.export_href))
                (results_table(&vm.view, vm.tooltips))
            }
        },
    )
}
