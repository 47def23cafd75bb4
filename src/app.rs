use std::collections::BTreeMap;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::country::{Country, Currency};
use crate::domain::entities::paging::PageControl;
use crate::infra::http::rest_countries::RestCountriesClient;
use crate::ui::state::app_state::{AppState, FetchState};
use crate::usecase::services::browse_service::{
    browse_view, next_page, previous_page, select_page,
};
use crate::usecase::services::country_service::CountryService;
use crate::{ELLIPSIS_OPTION_VALUE, MISSING_VALUE, PAGE_SIZE};

#[component]
pub fn App() -> Element {
    let AppState {
        mut fetch,
        mut search,
        mut page,
        mut status,
    } = AppState::new();

    let country_service = Arc::new(CountryService::new(Arc::new(RestCountriesClient::new())));

    let service_for_fetch = country_service.clone();
    use_future(move || {
        let service = service_for_fetch.clone();
        async move {
            match service.fetch_all().await {
                Ok(countries) => {
                    *status.write() = format!("Loaded {} countries", countries.len());
                    *fetch.write() = FetchState::Ready(countries);
                }
                Err(err) => {
                    *status.write() = format!("Failed to load countries: {err}");
                    *fetch.write() = FetchState::Failed(err);
                }
            }
        }
    });

    let body = match fetch() {
        FetchState::Loading => rsx! {
            p { style: "text-align: center; color: #666;", "Loading countries..." }
        },
        FetchState::Failed(err) => rsx! {
            p { style: "text-align: center; color: #b91c1c;",
                "Failed to load countries: {err}"
            }
        },
        FetchState::Ready(countries) => {
            let view = browse_view(&countries, &search(), PAGE_SIZE, page());
            let total = view.total_pages;
            let controls = view.controls;

            rsx! {
                div { style: "max-width: 440px; margin: 0 auto 24px auto;",
                    input {
                        r#type: "search",
                        style: "width: 100%; border: 1px solid #bbb; border-radius: 6px; padding: 8px 12px;",
                        placeholder: "Search countries...",
                        value: "{search}",
                        oninput: move |event| {
                            search.set(event.value());
                            page.set(1);
                        },
                    }
                }

                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 16px;",
                    for country in view.visible {
                        CountryCard { country }
                    }
                }

                div { style: "display: flex; gap: 8px; justify-content: center; align-items: center; margin-top: 24px;",
                    button {
                        style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                        disabled: page() <= 1,
                        onclick: move |_| page.set(previous_page(page())),
                        "Previous"
                    }

                    {controls.iter().map(|control| match control {
                        PageControl::Number { page: number, is_active } => {
                            let number = *number;
                            let background = if *is_active { "#ede9fe" } else { "#fff" };
                            let weight = if *is_active { "700" } else { "400" };
                            rsx!(
                                button {
                                    style: "border: 1px solid #bbb; background: {background}; font-weight: {weight}; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                                    onclick: move |_| page.set(select_page(number, total)),
                                    "{number}"
                                }
                            )
                        }
                        PageControl::Ellipsis { hidden } => {
                            let hidden = hidden.clone();
                            rsx!(
                                select {
                                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 6px; border-radius: 6px; cursor: pointer;",
                                    value: "{ELLIPSIS_OPTION_VALUE}",
                                    onchange: move |event| {
                                        if let Ok(target) = event.value().parse::<usize>() {
                                            page.set(select_page(target, total));
                                        }
                                    },
                                    option { value: "{ELLIPSIS_OPTION_VALUE}", "…" }
                                    for hidden_page in hidden {
                                        option { value: "{hidden_page}", "{hidden_page}" }
                                    }
                                }
                            )
                        }
                    })}

                    button {
                        style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                        disabled: total == 0 || page() >= total,
                        onclick: move |_| page.set(next_page(page(), total)),
                        "Next"
                    }

                    if total > 0 {
                        span { style: "color: #666;", "Page {page()} of {total}" }
                    }
                }
            }
        }
    };

    rsx! {
        div { style: "max-width: 1100px; margin: 0 auto; padding: 16px; font-family: sans-serif;",
            h1 { style: "text-align: center; font-size: 2.25rem; font-weight: 800; letter-spacing: -0.02em;",
                "Country Info App"
            }
            p { style: "text-align: center; color: #999; font-size: 0.85rem;", "{status}" }
            {body}
        }
    }
}

#[component]
fn CountryCard(country: Country) -> Element {
    let capital = format_capital(country.capital.as_deref());
    let area = format_area(country.area);
    let population = format_population(country.population);
    let continents = format_continents(country.continents.as_deref());
    let languages = format_languages(country.languages.as_ref());
    let currencies = format_currencies(country.currencies.as_ref());

    rsx! {
        div { style: "border: 1px solid #ddd; border-radius: 10px; padding: 16px; box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
            h2 { style: "text-align: center; margin: 0 0 12px 0; font-size: 1.5rem; color: #4c1d95;",
                "{country.name.official}"
            }
            p { strong { "Capital: " } "{capital}" }
            p { strong { "Area Size: " } "{area}" }
            p { strong { "Population: " } "{population}" }
            p { strong { "Continent: " } "{continents}" }
            p { strong { "Languages: " } "{languages}" }
            p { strong { "Currencies: " } "{currencies}" }
        }
    }
}

pub fn format_capital(capital: Option<&[String]>) -> String {
    match capital {
        Some(capital) => capital.join(", "),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(area) => format!("{} km²", format_decimal_with_commas(area)),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_population(population: Option<u64>) -> String {
    match population {
        Some(population) => format_integer_with_commas(population),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_continents(continents: Option<&[String]>) -> String {
    match continents {
        Some(continents) => continents.join(", "),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_languages(languages: Option<&BTreeMap<String, String>>) -> String {
    match languages {
        Some(languages) => languages.values().cloned().collect::<Vec<_>>().join(", "),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_currencies(currencies: Option<&BTreeMap<String, Currency>>) -> String {
    match currencies {
        Some(currencies) => currencies
            .values()
            .map(|currency| match &currency.symbol {
                Some(symbol) => format!("{} ({})", currency.name, symbol),
                None => currency.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_integer_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_decimal_with_commas(value: f64) -> String {
    if value.fract() == 0.0 {
        return format_integer_with_commas(value as u64);
    }

    let text = value.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "0"));
    let whole = whole.parse::<u64>().unwrap_or(0);
    format!("{}.{}", format_integer_with_commas(whole), fraction)
}
