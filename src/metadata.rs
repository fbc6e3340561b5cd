use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlHeadElement};

pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub author_url: &'static str,
    pub site_name: &'static str,
    pub og_description: &'static str,
    pub twitter_description: &'static str,
    pub twitter_creator: &'static str,
    pub locale: &'static str,
    pub theme_color: &'static str,
    pub robots: &'static str,
    pub icons: &'static [(&'static str, &'static str)],
}

pub const SITE: SiteMetadata = SiteMetadata {
    title: "Kamau Johnson - Software Developer | Data Scientist",
    description: "I build intelligent, scalable software solutions using Python and data. Full Stack Developer and Data Scientist specializing in modern web technologies and machine learning.",
    keywords: &[
        "Software Developer",
        "Data Scientist",
        "Python",
        "React",
        "Next.js",
        "Machine Learning",
        "Full Stack Developer",
        "Kenya",
        "Nairobi",
        "Web Development",
        "Data Analysis",
    ],
    author: "Kamau Johnson",
    author_url: "https://kamaujohnson.dev",
    site_name: "Kamau Johnson Portfolio",
    og_description: "I build intelligent, scalable software solutions using Python and data. Professional portfolio showcasing projects in web development and data science.",
    twitter_description: "I build intelligent, scalable software solutions using Python and data. Check out my portfolio!",
    twitter_creator: "@kamaujohnson",
    locale: "en_US",
    theme_color: "#7c3aed",
    robots: "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
    icons: &[("icon", "/favicon.ico"), ("apple-touch-icon", "/apple-touch-icon.png")],
};

/// `<meta>` attribute used as the key: `name` or `property`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl SiteMetadata {
    pub fn meta_tags(&self) -> Vec<(MetaKey, String)> {
        vec![
            (MetaKey::Name("description"), self.description.to_string()),
            (MetaKey::Name("keywords"), self.keywords.join(", ")),
            (MetaKey::Name("author"), self.author.to_string()),
            (MetaKey::Name("creator"), self.author.to_string()),
            (MetaKey::Name("robots"), self.robots.to_string()),
            (MetaKey::Name("googlebot"), self.robots.to_string()),
            (MetaKey::Name("theme-color"), self.theme_color.to_string()),
            (MetaKey::Property("og:type"), "website".to_string()),
            (MetaKey::Property("og:locale"), self.locale.to_string()),
            (MetaKey::Property("og:url"), self.author_url.to_string()),
            (MetaKey::Property("og:title"), self.title.to_string()),
            (MetaKey::Property("og:description"), self.og_description.to_string()),
            (MetaKey::Property("og:site_name"), self.site_name.to_string()),
            (MetaKey::Name("twitter:card"), "summary_large_image".to_string()),
            (MetaKey::Name("twitter:title"), self.title.to_string()),
            (MetaKey::Name("twitter:description"), self.twitter_description.to_string()),
            (MetaKey::Name("twitter:creator"), self.twitter_creator.to_string()),
        ]
    }

    /// Writes title, meta and icon tags into `<head>`. Runs once at startup.
    pub fn apply(&self, document: &Document) {
        document.set_title(self.title);
        let Some(head) = document.head() else {
            log::warn!("document has no <head>, skipping metadata");
            return;
        };

        for (key, content) in self.meta_tags() {
            let (attr, value) = match key {
                MetaKey::Name(v) => ("name", v),
                MetaKey::Property(v) => ("property", v),
            };
            let attrs = [(attr, value), ("content", content.as_str())];
            if let Err(err) = append_tag(document, &head, "meta", &attrs) {
                log::debug!("failed to write meta {}: {:?}", value, err);
            }
        }

        for (rel, href) in self.icons {
            if let Err(err) = append_tag(document, &head, "link", &[("rel", rel), ("href", href)]) {
                log::debug!("failed to write link {}: {:?}", rel, err);
            }
        }

        if let Some(root) = document.document_element() {
            if let Err(err) = root.set_attribute("lang", "en") {
                log::debug!("failed to set document lang: {:?}", err);
            }
        }
    }
}

fn append_tag(
    document: &Document,
    head: &HtmlHeadElement,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Result<(), JsValue> {
    let element = document.create_element(tag)?;
    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }
    head.append_child(&element)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(key: MetaKey) -> Option<String> {
        SITE.meta_tags().into_iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[test]
    fn test_keywords_joined() {
        let keywords = tag(MetaKey::Name("keywords")).unwrap();
        assert!(keywords.starts_with("Software Developer, Data Scientist, Python"));
        assert_eq!(keywords.split(", ").count(), SITE.keywords.len());
    }

    #[test]
    fn test_social_preview_tags() {
        assert_eq!(tag(MetaKey::Property("og:title")).as_deref(), Some(SITE.title));
        assert_eq!(tag(MetaKey::Name("twitter:card")).as_deref(), Some("summary_large_image"));
        assert_eq!(tag(MetaKey::Name("theme-color")).as_deref(), Some("#7c3aed"));
    }
}
