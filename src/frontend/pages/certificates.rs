use crate::{
    content::{Certificate, CertificateKind, CERTIFICATES},
    frontend::controls::{
        filter_buttons, use_pager, FilterOption, PageControls, PagerAction, SearchBox,
    },
    pagination::CategoryFilter,
    viewport::ViewportStatus,
};
use yew::prelude::*;

fn certificate_card(certificate: &'static Certificate, on_open: Callback<&'static Certificate>) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| on_open.emit(certificate));

    html! {
        <article class="certificate-card" key={certificate.id}>
            if let Some(image) = certificate.image {
                <img src={image} alt="" loading="lazy" />
            }
            <div class="certificate-body">
                <span class={classes!("badge", certificate.kind.badge())}>{ certificate.kind.label() }</span>
                <h3>{ certificate.title }</h3>
                <p class="muted">{ format!("{} · {}", certificate.issuer, certificate.date) }</p>
                <button type="button" class="button button-ghost" onclick={onclick}>{ "View details" }</button>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct CertificateDetailProps {
    certificate: &'static Certificate,
    on_close: Callback<()>,
}

#[function_component(CertificateDetail)]
fn certificate_detail(props: &CertificateDetailProps) -> Html {
    let certificate = props.certificate;
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="certificate-title"
                onclick={keep_open}
            >
                <button type="button" class="modal-close" aria-label="Close" onclick={on_close}>{ "✕" }</button>
                if let Some(image) = certificate.image {
                    <img class="modal-image" src={image} alt={certificate.title} />
                }
                <h2 id="certificate-title">{ certificate.title }</h2>
                <p class="muted">{ format!("{} · {}", certificate.issuer, certificate.date) }</p>
                <p>{ certificate.description }</p>
                <ul class="chip-list">
                    { for certificate.skills.iter().map(|skill| html! { <li class="chip">{ *skill }</li> }) }
                </ul>
                if let Some(credential_id) = certificate.credential_id {
                    <p class="muted">{ format!("Credential ID: {credential_id}") }</p>
                }
                if let Some(url) = certificate.credential_url {
                    <a class="button button-primary" href={url} target="_blank" rel="noopener noreferrer">
                        { "Verify credential" }
                    </a>
                }
            </div>
        </div>
    }
}

#[function_component(CertificatesPage)]
pub fn certificates_page() -> Html {
    let status = use_context::<ViewportStatus>().unwrap_or_default();
    let pager = use_pager(&CERTIFICATES, status.page_size);
    let selected = use_state(|| None::<&'static Certificate>);

    let options: Vec<FilterOption<CertificateKind>> = std::iter::once((CategoryFilter::All, "All"))
        .chain(
            CertificateKind::ALL
                .into_iter()
                .map(|kind| (CategoryFilter::Only(kind), kind.label())),
        )
        .map(|(filter, label)| FilterOption {
            filter,
            label,
            count: pager.count_for(filter),
        })
        .collect();

    let on_filter = {
        let pager = pager.clone();
        Callback::from(move |filter| pager.dispatch(PagerAction::Filter(filter)))
    };
    let on_search = {
        let pager = pager.clone();
        Callback::from(move |term| pager.dispatch(PagerAction::Search(term)))
    };
    let on_clear = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::Clear))
    };
    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |()| pager.dispatch(PagerAction::Prev))
    };
    let on_next = {
        let pager = pager.clone();
        Callback::from(move |()| pager.dispatch(PagerAction::Next))
    };
    let on_go = {
        let pager = pager.clone();
        Callback::from(move |page| pager.dispatch(PagerAction::Go(page)))
    };
    let on_open = {
        let selected = selected.clone();
        Callback::from(move |certificate| selected.set(Some(certificate)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let page = pager.page();
    let paginator = &pager.paginator;

    html! {
        <section class="page certificates" aria-labelledby="certificates-heading">
            <h1 id="certificates-heading">{ "Certifications" }</h1>
            <div class="listing-tools">
                { filter_buttons(options, paginator.active_filter(), on_filter) }
                <SearchBox
                    value={AttrValue::from(paginator.search_term().to_string())}
                    placeholder="Search by title, issuer or skill"
                    on_search={on_search}
                />
                if pager.is_narrowed() {
                    <button type="button" class="clear-button" onclick={on_clear.clone()}>{ "Clear" }</button>
                }
            </div>
            if page.is_empty() {
                <div class="empty-state">
                    <p>{ "No certificates match your search." }</p>
                    <button type="button" class="button button-ghost" onclick={on_clear}>{ "Show all certificates" }</button>
                </div>
            } else {
                <div class="certificate-grid">
                    { for page.into_iter().map(|certificate| certificate_card(certificate, on_open.clone())) }
                </div>
            }
            <PageControls
                current={paginator.current_page()}
                total={paginator.total_pages()}
                on_prev={on_prev}
                on_next={on_next}
                on_go={on_go}
            />
            if let Some(certificate) = *selected {
                <CertificateDetail certificate={certificate} on_close={on_close} />
            }
        </section>
    }
}
