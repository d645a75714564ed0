use maud::{html, Markup};

/// Takes 'content' and wraps the centered card and its heading around it.
pub fn card(heading: &str, content: Markup) -> Markup {
    html! {
        div class="min-h-screen flex items-center justify-center bg-gray-100" {
            div class="w-full max-w-md bg-white p-8 rounded-xl shadow-lg" {
                h2 class="text-2xl font-bold text-center mb-6" { (heading) }
                (content)
            }
        }
    }
}
