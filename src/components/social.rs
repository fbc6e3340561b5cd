use yew::prelude::*;

use crate::content::site::SocialLink;

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    pub links: &'static [SocialLink],
}

/// Round image badges used in the hero.
#[function_component(ImageLinks)]
pub fn image_links(props: &SocialLinksProps) -> Html {
    html! {
        <div class="social-images">
            { for props.links.iter().map(|link| html! {
                <a key={link.href} href={link.href} target="_blank" rel="noopener noreferrer" class="social-image">
                    <img src={link.icon} alt={link.label} width="32" height="32" />
                </a>
            }) }
        </div>
    }
}

/// Square glyph buttons used in the contact section and footer.
#[function_component(IconLinks)]
pub fn icon_links(props: &SocialLinksProps) -> Html {
    html! {
        <div class="social-icons">
            { for props.links.iter().map(|link| html! {
                <a key={link.href} href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                    <span class={classes!("social-icon", link.icon)}></span>
                </a>
            }) }
        </div>
    }
}
