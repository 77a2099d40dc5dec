//! Ownership guard - the caller may only read records filed under their own email.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::collections::HashMap;
use std::future::{Ready, ready};
use std::marker::PhantomData;

use actify_core::ports::AuthError;

use crate::middleware::auth::{AuthenticationError, Identity, authenticate};

/// Where the owner email is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    Query,
    Path,
}

/// Names the request parameter that carries the owner email of a route.
pub trait OwnerField: 'static {
    const NAME: &'static str;
    const SOURCE: ParamSource;
}

/// `?organizerEmail=` on the organizer's post listing.
#[derive(Debug)]
pub struct OrganizerEmail;

impl OwnerField for OrganizerEmail {
    const NAME: &'static str = "organizerEmail";
    const SOURCE: ParamSource = ParamSource::Query;
}

/// `?volunteerEmail=` on the volunteer's request listing.
#[derive(Debug)]
pub struct VolunteerEmail;

impl OwnerField for VolunteerEmail {
    const NAME: &'static str = "volunteerEmail";
    const SOURCE: ParamSource = ParamSource::Query;
}

/// Reject unless the requested email is exactly the authenticated one.
///
/// Comparison is case-sensitive. An absent parameter scopes the request to
/// the caller. A session without an email owns nothing.
pub fn ensure_owner(identity: &Identity, requested: Option<&str>) -> Result<(), AuthError> {
    if identity.email.is_empty() {
        return Err(AuthError::NotOwner);
    }

    match requested {
        Some(email) if email != identity.email => Err(AuthError::NotOwner),
        _ => Ok(()),
    }
}

/// An authenticated caller proven to own the email named by `F`.
#[derive(Debug)]
pub struct Owned<F: OwnerField> {
    pub identity: Identity,
    /// The email to scope the store query by.
    pub owner_email: String,
    _field: PhantomData<F>,
}

fn requested_owner<F: OwnerField>(req: &HttpRequest) -> Option<String> {
    match F::SOURCE {
        ParamSource::Query => web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .ok()
            .and_then(|q| q.into_inner().remove(F::NAME)),
        ParamSource::Path => req.match_info().get(F::NAME).map(String::from),
    }
}

impl<F: OwnerField> FromRequest for Owned<F> {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|identity| {
            let requested = requested_owner::<F>(req);
            ensure_owner(&identity, requested.as_deref()).inspect_err(|_| {
                tracing::warn!(
                    param = F::NAME,
                    "Rejected request for another identity's records"
                );
            })?;

            let owner_email = requested.unwrap_or_else(|| identity.email.clone());
            Ok(Owned {
                identity,
                owner_email,
                _field: PhantomData,
            })
        });

        ready(result.map_err(|e| AuthenticationError::new(e, req)))
    }
}
