use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::content::SiteContent;

fn map_search_link(street: &str, city: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(&format!("{}, {}", street, city))
    )
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let contact = &content.contact;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h2>{ content.brand.clone() }</h2>
                    <p>{"Conception et aménagement de jardins contemporains et extérieurs haut de gamme pour particuliers exigeants."}</p>
                </div>
                <div class="footer-links">
                    <h3>{"Navigation"}</h3>
                    <ul>
                        { for content.nav.iter().map(|link| html! {
                            <li><a href={link.href.clone()}>{ link.label.clone() }</a></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-contact">
                    <h3>{"Contact"}</h3>
                    <ul>
                        <li>
                            <a href={map_search_link(&contact.street, &contact.city)} target="_blank" rel="noopener noreferrer">
                                { contact.street.clone() }<br />{ contact.city.clone() }
                            </a>
                        </li>
                        <li><a href={format!("tel:{}", contact.phone_href)}>{ contact.phone.clone() }</a></li>
                        <li><a href={format!("mailto:{}", contact.email)}>{ contact.email.clone() }</a></li>
                    </ul>
                </div>
                <div class="footer-area">
                    <h3>{"Zone d'intervention"}</h3>
                    <p>{ contact.area.clone() }</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {} {} Atelier Paysage. Tous droits réservés.", year, content.brand) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_link_encodes_the_address() {
        assert_eq!(
            map_search_link("12 Avenue Montaigne", "75008 Paris"),
            "https://www.google.com/maps/search/?api=1&query=12%20Avenue%20Montaigne%2C%2075008%20Paris"
        );
    }
}
