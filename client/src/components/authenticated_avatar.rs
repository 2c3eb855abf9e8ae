//! Avatar whose image is fetched through the authenticated client.
//!
//! Stored image paths are served by `GET /images/{file}`, which requires the
//! bearer header, so the bytes are fetched with [`ApiClient::get_bytes`] and
//! shown through a blob object URL. The URL is revoked on cleanup or when the
//! path changes. Each fetch has its own flag, so a response for an older path
//! is discarded once the path moves on.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::util::active::ActiveSlot;

#[component]
pub fn AuthenticatedAvatar(
    #[prop(into)] path: Signal<Option<String>>,
    #[prop(into)] fallback: Signal<String>,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let src = RwSignal::new(None::<String>);
    let requests = ActiveSlot::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::image_url::authenticated_image_path;

        let requests = requests.clone();
        Effect::new(move || {
            let endpoint = path.get().as_deref().and_then(authenticated_image_path);
            let active = requests.renew();
            release(src);
            let Some(endpoint) = endpoint else {
                return;
            };
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.get_bytes(&endpoint).await {
                    Ok(bytes) => {
                        let file_name = endpoint.rsplit('/').next().unwrap_or_default();
                        let content_type = crate::util::image_url::content_type_for(file_name);
                        match object_url(&bytes, content_type) {
                            Some(url) => {
                                let shown = active.commit(|| {
                                    release(src);
                                    src.set(Some(url.clone()));
                                });
                                if !shown {
                                    let _ = web_sys::Url::revoke_object_url(&url);
                                }
                            }
                            None => log::warn!("could not create object URL for {endpoint}"),
                        }
                    }
                    Err(err) => log::error!("failed to load authenticated image {endpoint}: {err}"),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (&client, path);

    on_cleanup(move || {
        requests.deactivate();
        release(src);
    });

    view! {
        <span class="avatar" class:avatar--large=large>
            {move || match src.get() {
                Some(url) => view! { <img class="avatar__image" src=url alt=move || fallback.get()/> }.into_any(),
                None => view! { <span class="avatar__fallback">{move || fallback.get()}</span> }.into_any(),
            }}
        </span>
    }
}

/// Clear `src`, revoking the object URL it held.
fn release(src: RwSignal<Option<String>>) {
    let Some(url) = src.try_update_untracked(Option::take).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = url;
    src.try_set(None);
}

#[cfg(feature = "hydrate")]
fn object_url(bytes: &[u8], content_type: &str) -> Option<String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}
