//! Every activitystreams property known to this crate, with the kinds each one accepts in
//! priority order. Adding a property means adding a row here and listing it on its types.

use crate::{Kind, PropertyDef, TypeKind as T, ValueKind as V};

/// anything that is either an object or a link
pub const ENTITY: &[Kind] = &[
	Kind::Type(T::Object),
	Kind::Type(T::Link),
	Kind::Type(T::Mention),
	Kind::Type(T::Activity),
	Kind::Type(T::IntransitiveActivity),
	Kind::Type(T::Question),
	Kind::Type(T::Create),
	Kind::Type(T::Like),
	Kind::Type(T::Note),
	Kind::Type(T::Article),
	Kind::Type(T::Document),
	Kind::Type(T::Image),
	Kind::Type(T::Place),
	Kind::Type(T::Person),
	Kind::Type(T::Collection),
	Kind::Type(T::OrderedCollection),
	Kind::Type(T::CollectionPage),
	Kind::Type(T::OrderedCollectionPage),
];

const TEXT: &[Kind] = &[Kind::Value(V::String), Kind::Value(V::LangString)];
const STRING: &[Kind] = &[Kind::Value(V::String)];
const FLOAT: &[Kind] = &[Kind::Value(V::Float)];
const COUNT: &[Kind] = &[Kind::Value(V::NonNegativeInteger)];
const INSTANT: &[Kind] = &[Kind::Value(V::DateTime)];
/// only iris
const ANY_URI: &[Kind] = &[];

const LINKS: &[Kind] = &[Kind::Type(T::Link), Kind::Type(T::Mention)];
const IMAGES: &[Kind] = &[Kind::Type(T::Image), Kind::Type(T::Link), Kind::Type(T::Mention)];
const PAGES: &[Kind] = &[
	Kind::Type(T::CollectionPage),
	Kind::Type(T::Link),
	Kind::Type(T::Mention),
	Kind::Type(T::OrderedCollectionPage),
];
const COLLECTIONS: &[Kind] = &[Kind::Type(T::Collection), Kind::Type(T::OrderedCollection)];
const ORDERED: &[Kind] = &[Kind::Type(T::OrderedCollection), Kind::Type(T::OrderedCollectionPage)];
const ANY_COLLECTION: &[Kind] = &[
	Kind::Type(T::OrderedCollection),
	Kind::Type(T::Collection),
	Kind::Type(T::CollectionPage),
	Kind::Type(T::OrderedCollectionPage),
];

// json-ld keywords
pub static ID: PropertyDef = PropertyDef::functional("id", ANY_URI).keyword();
pub static TYPE: PropertyDef = PropertyDef::non_functional("type", STRING).keyword();

pub static ACCURACY: PropertyDef = PropertyDef::functional("accuracy", FLOAT);
pub static ACTOR: PropertyDef = PropertyDef::non_functional("actor", ENTITY);
pub static ALTITUDE: PropertyDef = PropertyDef::functional("altitude", FLOAT);
pub static ANY_OF: PropertyDef = PropertyDef::non_functional("anyOf", ENTITY);
pub static ATTACHMENT: PropertyDef = PropertyDef::non_functional("attachment", ENTITY);
pub static ATTRIBUTED_TO: PropertyDef = PropertyDef::non_functional("attributedTo", ENTITY);
pub static AUDIENCE: PropertyDef = PropertyDef::non_functional("audience", ENTITY);
pub static BCC: PropertyDef = PropertyDef::non_functional("bcc", ENTITY);
pub static BTO: PropertyDef = PropertyDef::non_functional("bto", ENTITY);
pub static CC: PropertyDef = PropertyDef::non_functional("cc", ENTITY);
pub static CLOSED: PropertyDef = PropertyDef::non_functional("closed", &[
	Kind::Type(T::Object),
	Kind::Type(T::Link),
	Kind::Type(T::Mention),
	Kind::Value(V::DateTime),
	Kind::Value(V::Boolean),
]);
pub static CONTENT: PropertyDef = PropertyDef::non_functional("content", TEXT).with_lang_map();
pub static CONTEXT: PropertyDef = PropertyDef::non_functional("context", ENTITY);
pub static CURRENT: PropertyDef = PropertyDef::functional("current", PAGES);
pub static DURATION: PropertyDef = PropertyDef::functional("duration", &[Kind::Value(V::Duration)]);
pub static END_TIME: PropertyDef = PropertyDef::functional("endTime", INSTANT);
pub static FIRST: PropertyDef = PropertyDef::functional("first", PAGES);
pub static FOLLOWERS: PropertyDef = PropertyDef::functional("followers", ANY_COLLECTION);
pub static FOLLOWING: PropertyDef = PropertyDef::functional("following", ANY_COLLECTION);
pub static GENERATOR: PropertyDef = PropertyDef::non_functional("generator", ENTITY);
pub static HEIGHT: PropertyDef = PropertyDef::functional("height", COUNT);
pub static HREF: PropertyDef = PropertyDef::functional("href", ANY_URI);
pub static HREFLANG: PropertyDef = PropertyDef::functional("hreflang", STRING);
pub static ICON: PropertyDef = PropertyDef::non_functional("icon", IMAGES);
pub static IMAGE: PropertyDef = PropertyDef::non_functional("image", IMAGES);
pub static INBOX: PropertyDef = PropertyDef::functional("inbox", ORDERED);
pub static IN_REPLY_TO: PropertyDef = PropertyDef::non_functional("inReplyTo", ENTITY);
pub static INSTRUMENT: PropertyDef = PropertyDef::non_functional("instrument", ENTITY);
pub static ITEMS: PropertyDef = PropertyDef::non_functional("items", ENTITY);
pub static LAST: PropertyDef = PropertyDef::functional("last", PAGES);
pub static LATITUDE: PropertyDef = PropertyDef::functional("latitude", FLOAT);
pub static LIKED: PropertyDef = PropertyDef::functional("liked", ANY_COLLECTION);
pub static LIKES: PropertyDef = PropertyDef::functional("likes", COLLECTIONS);
pub static LOCATION: PropertyDef = PropertyDef::non_functional("location", ENTITY);
pub static LONGITUDE: PropertyDef = PropertyDef::functional("longitude", FLOAT);
pub static MEDIA_TYPE: PropertyDef = PropertyDef::functional("mediaType", STRING);
pub static NAME: PropertyDef = PropertyDef::non_functional("name", TEXT).with_lang_map();
pub static NEXT: PropertyDef = PropertyDef::functional("next", PAGES);
pub static OBJECT: PropertyDef = PropertyDef::non_functional("object", ENTITY);
pub static ONE_OF: PropertyDef = PropertyDef::non_functional("oneOf", ENTITY);
pub static ORDERED_ITEMS: PropertyDef = PropertyDef::non_functional("orderedItems", ENTITY);
pub static ORIGIN: PropertyDef = PropertyDef::non_functional("origin", ENTITY);
pub static OUTBOX: PropertyDef = PropertyDef::functional("outbox", ORDERED);
pub static PART_OF: PropertyDef = PropertyDef::functional("partOf", &[
	Kind::Type(T::Link),
	Kind::Type(T::Collection),
	Kind::Type(T::CollectionPage),
	Kind::Type(T::Mention),
	Kind::Type(T::OrderedCollection),
	Kind::Type(T::OrderedCollectionPage),
]);
pub static PREFERRED_USERNAME: PropertyDef = PropertyDef::functional("preferredUsername", TEXT).with_lang_map();
pub static PREV: PropertyDef = PropertyDef::functional("prev", PAGES);
pub static PREVIEW: PropertyDef = PropertyDef::non_functional("preview", ENTITY);
pub static PUBLISHED: PropertyDef = PropertyDef::functional("published", INSTANT);
pub static RADIUS: PropertyDef = PropertyDef::functional("radius", FLOAT);
pub static REL: PropertyDef = PropertyDef::non_functional("rel", STRING);
pub static REPLIES: PropertyDef = PropertyDef::functional("replies", &[Kind::Type(T::Collection)]);
pub static RESULT: PropertyDef = PropertyDef::non_functional("result", ENTITY);
pub static SHARES: PropertyDef = PropertyDef::functional("shares", COLLECTIONS);
pub static START_INDEX: PropertyDef = PropertyDef::functional("startIndex", COUNT);
pub static START_TIME: PropertyDef = PropertyDef::functional("startTime", INSTANT);
pub static STREAMS: PropertyDef = PropertyDef::non_functional("streams", COLLECTIONS);
pub static SUMMARY: PropertyDef = PropertyDef::non_functional("summary", TEXT).with_lang_map();
pub static TAG: PropertyDef = PropertyDef::non_functional("tag", ENTITY);
pub static TARGET: PropertyDef = PropertyDef::non_functional("target", ENTITY);
pub static TO: PropertyDef = PropertyDef::non_functional("to", ENTITY);
pub static TOTAL_ITEMS: PropertyDef = PropertyDef::functional("totalItems", COUNT);
pub static UNITS: PropertyDef = PropertyDef::functional("units", STRING);
pub static UPDATED: PropertyDef = PropertyDef::functional("updated", INSTANT);
pub static URL: PropertyDef = PropertyDef::non_functional("url", LINKS);
pub static WIDTH: PropertyDef = PropertyDef::functional("width", COUNT);
