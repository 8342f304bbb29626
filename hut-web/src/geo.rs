//! Browser geolocation for mission claims.
use crate::dom;
use hut_core::geo::{HIGH_ACCURACY, POSITION_MAX_AGE_MS, POSITION_TIMEOUT_MS};
use hut_core::{GeoPoint, Geofence, GeofenceStatus, LocationFailure};
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{PermissionState, PermissionStatus, PositionOptions};

#[derive(Serialize)]
struct PermissionQuery {
    name: &'static str,
}

/// `true` when the Permissions API says geolocation is denied. Any failure
/// of the query itself counts as "not denied" so the position request still runs.
#[allow(clippy::future_not_send)]
async fn permission_denied() -> bool {
    let Ok(permissions) = dom::window().navigator().permissions() else {
        return false;
    };
    let Ok(descriptor) = serde_wasm_bindgen::to_value(&PermissionQuery {
        name: "geolocation",
    }) else {
        return false;
    };
    let Ok(descriptor) = descriptor.dyn_into::<js_sys::Object>() else {
        return false;
    };
    let Ok(promise) = permissions.query(&descriptor) else {
        return false;
    };
    match JsFuture::from(promise).await {
        Ok(status) => status
            .dyn_into::<PermissionStatus>()
            .is_ok_and(|status| status.state() == PermissionState::Denied),
        Err(err) => {
            log::debug!("permission query failed: {}", dom::js_error_message(&err));
            false
        }
    }
}

fn number_field(obj: &JsValue, field: &str) -> Option<f64> {
    Reflect::get(obj, &JsValue::from_str(field)).ok()?.as_f64()
}

fn position_to_point(position: &JsValue) -> Option<GeoPoint> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    Some(GeoPoint::new(
        number_field(&coords, "latitude")?,
        number_field(&coords, "longitude")?,
    ))
}

/// One low-accuracy position fix.
#[allow(clippy::future_not_send)]
pub async fn current_position() -> Result<GeoPoint, LocationFailure> {
    let navigator = dom::window().navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(LocationFailure::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| LocationFailure::Unsupported)?;

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(HIGH_ACCURACY);
    options.set_timeout(POSITION_TIMEOUT_MS);
    options.set_maximum_age(POSITION_MAX_AGE_MS);

    let mut callbacks: Option<(Function, Function)> = None;
    let promise = Promise::new(&mut |resolve, reject| callbacks = Some((resolve, reject)));
    let (resolve, reject) = callbacks.ok_or(LocationFailure::Unavailable)?;

    let on_success = Closure::once(move |position: JsValue| {
        let _ = resolve.call1(&JsValue::UNDEFINED, &position);
    });
    let on_error = Closure::once(move |error: JsValue| {
        let _ = reject.call1(&JsValue::UNDEFINED, &error);
    });
    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|_| LocationFailure::Unsupported)?;

    let result = JsFuture::from(promise).await;
    drop((on_success, on_error));
    match result {
        Ok(position) => position_to_point(&position).ok_or(LocationFailure::Unavailable),
        Err(error) => {
            let code = number_field(&error, "code").unwrap_or(0.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let failure = LocationFailure::from_error_code(code as u16);
            log::info!("position request failed: {failure:?}");
            Err(failure)
        }
    }
}

/// Classify where the visitor is relative to the shop.
#[allow(clippy::future_not_send)]
pub async fn check_proximity(fence: Geofence) -> GeofenceStatus {
    if permission_denied().await {
        return GeofenceStatus::PermissionDenied;
    }
    fence.classify_result(current_position().await)
}
