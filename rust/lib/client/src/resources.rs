//! Per-resource clients.
//!
//! Each client wraps a [`ResourceClient`] (standard `list`/`get`/`create`/
//! `update`/`delete`/`autocomplete` via `Deref`) and adds the resource's own
//! actions. `action` entries post plain params; `upload` entries also set
//! `options.fileUpload`.

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::envelope::Response;
use crate::error::ApiError;
use crate::path::to_kebab_case;
use crate::resource::ResourceClient;
use crate::transport::ApiClient;

/// Entry point holding the shared transport.
#[derive(Debug, Clone)]
pub struct Sdk {
    api: ApiClient,
}

impl Sdk {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { api: ApiClient::new(base_url) }
    }

    pub fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Look a resource up by name (`partner_account`, `partner-account`
    /// and `PartnerAccount` all match).
    pub fn resource(&self, name: &str) -> Option<ResourceClient> {
        let wanted = to_kebab_case(name);
        RESOURCES
            .iter()
            .copied()
            .find(|r| to_kebab_case(r) == wanted)
            .map(|r| ResourceClient::new(self.api.clone(), r))
    }
}

macro_rules! resource_method {
    (action $method:ident) => {
        pub async fn $method<P: Serialize + ?Sized>(&self, params: &P) -> Result<Response<Value>, ApiError> {
            self.0.action(stringify!($method), params).await
        }
    };
    (upload $method:ident) => {
        pub async fn $method<P: Serialize + ?Sized>(&self, params: &P) -> Result<Response<Value>, ApiError> {
            self.0.upload(stringify!($method), params).await
        }
    };
}

macro_rules! resource_clients {
    ($(
        $(#[$meta:meta])*
        $accessor:ident => $client:ident($resource:literal) { $($kind:ident $method:ident;)* }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone)]
            pub struct $client(ResourceClient);

            impl $client {
                pub fn new(api: ApiClient) -> Self {
                    Self(ResourceClient::new(api, $resource))
                }

                $( resource_method!($kind $method); )*
            }

            impl Deref for $client {
                type Target = ResourceClient;
                fn deref(&self) -> &ResourceClient {
                    &self.0
                }
            }
        )*

        impl Sdk {
            $(
                pub fn $accessor(&self) -> $client {
                    $client::new(self.api.clone())
                }
            )*
        }

        /// Every resource name known to this client.
        pub const RESOURCES: &[&str] = &[$($resource),*];
    };
}

resource_clients! {
    account => AccountClient("account") {
        action activate;
        action deactivate;
        upload upload_logo;
    }
    amenity => AmenityClient("amenity") {}
    availability => AvailabilityClient("availability") {
        action check;
        action block;
        action unblock;
    }
    /// Reservations. `check_in`/`check_out` move the stay through its lifecycle.
    booking => BookingClient("booking") {
        action confirm;
        action cancel;
        action check_in;
        action check_out;
        action quote;
        action send_confirmation;
    }
    booking_guest => BookingGuestClient("booking_guest") {
        upload upload_document;
    }
    booking_payment => BookingPaymentClient("booking_payment") {
        action refund;
        action capture;
    }
    calendar => CalendarClient("calendar") {
        action sync;
        action export;
    }
    channel => ChannelClient("channel") {
        action connect;
        action disconnect;
        action sync;
    }
    coupon => CouponClient("coupon") {
        action validate;
    }
    currency => CurrencyClient("currency") {
        action rates;
    }
    document => DocumentClient("document") {
        upload upload;
        action download;
    }
    email_template => EmailTemplateClient("email_template") {
        action preview;
        action send_test;
    }
    extra => ExtraClient("extra") {}
    fee => FeeClient("fee") {}
    guest => GuestClient("guest") {
        action merge;
        upload upload_document;
    }
    invoice => InvoiceClient("invoice") {
        action issue;
        action void;
        action download;
        action send;
    }
    language => LanguageClient("language") {}
    message => MessageClient("message") {
        action send;
        action mark_read;
        upload upload_attachment;
    }
    partner_account => PartnerAccountClient("partner_account") {
        action invite;
        action approve;
        action suspend;
    }
    payment => PaymentClient("payment") {
        action refund;
    }
    payout => PayoutClient("payout") {
        action schedule;
    }
    property => PropertyClient("property") {
        action publish;
        action unpublish;
        action duplicate;
        upload upload_image;
        action reorder_images;
    }
    property_group => PropertyGroupClient("property_group") {}
    property_image => PropertyImageClient("property_image") {
        upload upload;
    }
    rate_plan => RatePlanClient("rate_plan") {
        action bulk_update;
    }
    report => ReportClient("report") {
        action generate;
        action download;
    }
    review => ReviewClient("review") {
        action reply;
        action hide;
    }
    room_type => RoomTypeClient("room_type") {}
    season => SeasonClient("season") {}
    tax => TaxClient("tax") {}
    task => TaskClient("task") {
        action complete;
        action assign;
    }
    translation => TranslationClient("translation") {
        action import;
        action export;
    }
    user => UserClient("user") {
        action invite;
        upload upload_avatar;
    }
    webhook => WebhookClient("webhook") {
        action test;
        action rotate_secret;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_any_spelling() {
        let sdk = Sdk::new("http://localhost:3000");
        assert_eq!(sdk.resource("partner_account").unwrap().resource(), "partner_account");
        assert_eq!(sdk.resource("partner-account").unwrap().resource(), "partner_account");
        assert_eq!(sdk.resource("PartnerAccount").unwrap().resource(), "partner_account");
        assert!(sdk.resource("spaceship").is_none());
    }

    #[test]
    fn accessors_bind_resource_names() {
        let sdk = Sdk::new("http://localhost:3000");
        assert_eq!(sdk.booking().resource(), "booking");
        assert_eq!(sdk.rate_plan().resource(), "rate_plan");
        assert_eq!(sdk.booking_guest().api().base_url(), "http://localhost:3000");
    }

    #[test]
    fn resource_names_are_unique() {
        let mut names: Vec<_> = RESOURCES.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RESOURCES.len());
        assert!(RESOURCES.len() >= 30);
    }
}
