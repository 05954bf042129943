use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::QuestionForm;

#[component]
pub fn App() -> Element {
    let context = use_context::<AppContext>();
    let question = use_signal(|| context.starting_draft());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{context.mode().title()}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuestionForm {
                    question,
                    categories: context.categories().clone(),
                    submitter: context.submitter(),
                    mode: context.mode(),
                    config: context.editor_config(),
                }
            }
        }
    }
}
