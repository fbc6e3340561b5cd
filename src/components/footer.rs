use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::social::IconLinks;
use crate::content::site::{FOOTER_SOCIALS, OWNER_NAME};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, OWNER_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-copyright">{copyright_line(year)}</p>
                <IconLinks links={FOOTER_SOCIALS} />
            </div>
        </footer>
    }
}
