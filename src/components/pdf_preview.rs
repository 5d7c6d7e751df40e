//! PDF Preview Component
//!
//! Off-screen, read-only copy of the active layout. Its markup is what
//! the export sends to the renderer, so it only uses the `pdf-*` classes
//! the print document styles.

use catalog_core::{format_price, Product, ViewMode};
use leptos::html::Div;
use leptos::prelude::*;

#[component]
pub fn PdfPreview(
    view_mode: Signal<ViewMode>,
    products: Signal<Vec<Product>>,
    business_name: Signal<String>,
    node_ref: NodeRef<Div>,
) -> impl IntoView {
    view! {
        <div class="pdf-offscreen" aria-hidden="true">
            <div node_ref=node_ref class="pdf-content">
                {move || {
                    let products = products.get();
                    match view_mode.get() {
                        ViewMode::Cards => pdf_cards(products).into_any(),
                        ViewMode::Checklist => pdf_checklist(products, business_name.get()).into_any(),
                        ViewMode::Table => pdf_table(products, business_name.get()).into_any(),
                    }
                }}
            </div>
        </div>
    }
}

fn pdf_cards(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="pdf-card-list">
            {products
                .into_iter()
                .map(|product| view! {
                    <div class="pdf-card">
                        <div class="pdf-card-body">
                            <div>
                                <h3 class="pdf-card-title">{product.title.clone()}</h3>
                                <p class="pdf-card-desc">{product.description}</p>
                                <span class="pdf-card-price">{format_price(product.price)}</span>
                            </div>
                            <div class="pdf-card-image">
                                <img src=product.image alt=product.title />
                            </div>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn pdf_checklist(products: Vec<Product>, business_name: String) -> impl IntoView {
    view! {
        <div class="pdf-checklist">
            <div class="pdf-checklist-header">
                <div class="pdf-checklist-title">"Products " {business_name}</div>
                <div class="pdf-checklist-subtitle">"Full catalog with prices"</div>
            </div>
            {products
                .into_iter()
                .map(|product| view! {
                    <div class="pdf-checklist-item">
                        <div class="pdf-checklist-thumb">
                            <img src=product.image alt=product.title.clone() />
                        </div>
                        <div>
                            <div class="pdf-checklist-name">{product.title}</div>
                            <div class="pdf-checklist-desc">{product.description}</div>
                        </div>
                        <div class="pdf-checklist-price">{format_price(product.price)}</div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn pdf_table(products: Vec<Product>, business_name: String) -> impl IntoView {
    view! {
        <div class="pdf-table-wrap">
            <h2 class="pdf-checklist-title">{business_name}</h2>
            <table class="pdf-table">
                <thead>
                    <tr>
                        <th>"Image"</th>
                        <th>"Product"</th>
                        <th>"Description"</th>
                        <th>"Price"</th>
                    </tr>
                </thead>
                <tbody>
                    {products
                        .into_iter()
                        .map(|product| view! {
                            <tr>
                                <td class="pdf-checklist-thumb">
                                    <img src=product.image alt=product.title.clone() />
                                </td>
                                <td>{product.title}</td>
                                <td>{product.description}</td>
                                <td>{format_price(product.price)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
