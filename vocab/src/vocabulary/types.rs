//! Activitystreams types known to this crate. Every type is just its property list plus its
//! position in the type hierarchy.

use crate::{TypeDef, TypeKind as T};

/// Property table of a type. Entries must be sorted by name, objects are compared following it.
macro_rules! props {
	( $($prop:ident),* $(,)? ) => {
		&[ $(&$crate::vocabulary::properties::$prop,)* ]
	};
}

const LINKS: &[T] = &[T::Link, T::Mention];

const OBJECTS: &[T] = &[
	T::Object,
	T::Activity,
	T::IntransitiveActivity,
	T::Question,
	T::Create,
	T::Like,
	T::Note,
	T::Article,
	T::Document,
	T::Image,
	T::Place,
	T::Person,
	T::Collection,
	T::OrderedCollection,
	T::CollectionPage,
	T::OrderedCollectionPage,
];

pub static OBJECT: TypeDef = TypeDef {
	kind: T::Object,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, DURATION,
		END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, LIKES, LOCATION, MEDIA_TYPE, NAME,
		PREVIEW, PUBLISHED, REPLIES, SHARES, START_TIME, SUMMARY, TAG, TO, TYPE, UPDATED, URL,
	],
	extends: &[],
	extended_by: &[
		T::Activity,
		T::IntransitiveActivity,
		T::Question,
		T::Create,
		T::Like,
		T::Note,
		T::Article,
		T::Document,
		T::Image,
		T::Place,
		T::Person,
		T::Collection,
		T::OrderedCollection,
		T::CollectionPage,
		T::OrderedCollectionPage,
	],
	disjoint_with: LINKS,
};

pub static LINK: TypeDef = TypeDef {
	kind: T::Link,
	properties: props![
		ATTRIBUTED_TO, HEIGHT, HREF, HREFLANG, ID, MEDIA_TYPE, NAME, PREVIEW, REL, SUMMARY, TYPE,
		WIDTH,
	],
	extends: &[],
	extended_by: &[T::Mention],
	disjoint_with: OBJECTS,
};

pub static MENTION: TypeDef = TypeDef {
	kind: T::Mention,
	properties: props![
		ATTRIBUTED_TO, HEIGHT, HREF, HREFLANG, ID, MEDIA_TYPE, NAME, PREVIEW, REL, SUMMARY, TYPE,
		WIDTH,
	],
	extends: &[T::Link],
	extended_by: &[],
	disjoint_with: OBJECTS,
};

pub static ACTIVITY: TypeDef = TypeDef {
	kind: T::Activity,
	properties: props![
		ACTOR, ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT,
		DURATION, END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, INSTRUMENT, LIKES, LOCATION,
		MEDIA_TYPE, NAME, OBJECT, ORIGIN, PREVIEW, PUBLISHED, REPLIES, RESULT, SHARES, START_TIME,
		SUMMARY, TAG, TARGET, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Object],
	extended_by: &[T::IntransitiveActivity, T::Question, T::Create, T::Like],
	disjoint_with: LINKS,
};

pub static INTRANSITIVE_ACTIVITY: TypeDef = TypeDef {
	kind: T::IntransitiveActivity,
	properties: props![
		ACTOR, ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT,
		DURATION, END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, INSTRUMENT, LIKES, LOCATION,
		MEDIA_TYPE, NAME, ORIGIN, PREVIEW, PUBLISHED, REPLIES, RESULT, SHARES, START_TIME, SUMMARY,
		TAG, TARGET, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Activity, T::Object],
	extended_by: &[T::Question],
	disjoint_with: LINKS,
};

pub static QUESTION: TypeDef = TypeDef {
	kind: T::Question,
	properties: props![
		ACTOR, ALTITUDE, ANY_OF, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CLOSED,
		CONTENT, CONTEXT, DURATION, END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, INSTRUMENT,
		LIKES, LOCATION, MEDIA_TYPE, NAME, ONE_OF, ORIGIN, PREVIEW, PUBLISHED, REPLIES, RESULT,
		SHARES, START_TIME, SUMMARY, TAG, TARGET, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Activity, T::IntransitiveActivity, T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static CREATE: TypeDef = TypeDef {
	kind: T::Create,
	properties: props![
		ACTOR, ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT,
		DURATION, END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, INSTRUMENT, LIKES, LOCATION,
		MEDIA_TYPE, NAME, OBJECT, ORIGIN, PREVIEW, PUBLISHED, REPLIES, RESULT, SHARES, START_TIME,
		SUMMARY, TAG, TARGET, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Activity, T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static LIKE: TypeDef = TypeDef {
	kind: T::Like,
	properties: props![
		ACTOR, ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT,
		DURATION, END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, INSTRUMENT, LIKES, LOCATION,
		MEDIA_TYPE, NAME, OBJECT, ORIGIN, PREVIEW, PUBLISHED, REPLIES, RESULT, SHARES, START_TIME,
		SUMMARY, TAG, TARGET, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Activity, T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static NOTE: TypeDef = TypeDef {
	kind: T::Note,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, DURATION,
		END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, LIKES, LOCATION, MEDIA_TYPE, NAME,
		PREVIEW, PUBLISHED, REPLIES, SHARES, START_TIME, SUMMARY, TAG, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static ARTICLE: TypeDef = TypeDef {
	kind: T::Article,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, DURATION,
		END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, LIKES, LOCATION, MEDIA_TYPE, NAME,
		PREVIEW, PUBLISHED, REPLIES, SHARES, START_TIME, SUMMARY, TAG, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static DOCUMENT: TypeDef = TypeDef {
	kind: T::Document,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, DURATION,
		END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, LIKES, LOCATION, MEDIA_TYPE, NAME,
		PREVIEW, PUBLISHED, REPLIES, SHARES, START_TIME, SUMMARY, TAG, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Object],
	extended_by: &[T::Image],
	disjoint_with: LINKS,
};

pub static IMAGE: TypeDef = TypeDef {
	kind: T::Image,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, DURATION,
		END_TIME, GENERATOR, HEIGHT, ICON, ID, IMAGE, IN_REPLY_TO, LIKES, LOCATION, MEDIA_TYPE,
		NAME, PREVIEW, PUBLISHED, REPLIES, SHARES, START_TIME, SUMMARY, TAG, TO, TYPE, UPDATED,
		URL, WIDTH,
	],
	extends: &[T::Document, T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static PLACE: TypeDef = TypeDef {
	kind: T::Place,
	properties: props![
		ACCURACY, ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT,
		DURATION, END_TIME, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, LATITUDE, LIKES, LOCATION,
		LONGITUDE, MEDIA_TYPE, NAME, PREVIEW, PUBLISHED, RADIUS, REPLIES, SHARES, START_TIME,
		SUMMARY, TAG, TO, TYPE, UNITS, UPDATED, URL,
	],
	extends: &[T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static PERSON: TypeDef = TypeDef {
	kind: T::Person,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, DURATION,
		END_TIME, FOLLOWERS, FOLLOWING, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, INBOX, LIKED,
		LIKES, LOCATION, MEDIA_TYPE, NAME, OUTBOX, PREFERRED_USERNAME, PREVIEW, PUBLISHED, REPLIES,
		SHARES, START_TIME, STREAMS, SUMMARY, TAG, TO, TYPE, UPDATED, URL,
	],
	extends: &[T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

pub static COLLECTION: TypeDef = TypeDef {
	kind: T::Collection,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, CURRENT,
		DURATION, END_TIME, FIRST, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, ITEMS, LAST, LIKES,
		LOCATION, MEDIA_TYPE, NAME, PREVIEW, PUBLISHED, REPLIES, SHARES, START_TIME, SUMMARY, TAG,
		TO, TOTAL_ITEMS, TYPE, UPDATED, URL,
	],
	extends: &[T::Object],
	extended_by: &[T::OrderedCollection, T::CollectionPage, T::OrderedCollectionPage],
	disjoint_with: LINKS,
};

pub static ORDERED_COLLECTION: TypeDef = TypeDef {
	kind: T::OrderedCollection,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, CURRENT,
		DURATION, END_TIME, FIRST, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, LAST, LIKES, LOCATION,
		MEDIA_TYPE, NAME, ORDERED_ITEMS, PREVIEW, PUBLISHED, REPLIES, SHARES, START_TIME, SUMMARY,
		TAG, TO, TOTAL_ITEMS, TYPE, UPDATED, URL,
	],
	extends: &[T::Collection, T::Object],
	extended_by: &[T::OrderedCollectionPage],
	disjoint_with: LINKS,
};

pub static COLLECTION_PAGE: TypeDef = TypeDef {
	kind: T::CollectionPage,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, CURRENT,
		DURATION, END_TIME, FIRST, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, ITEMS, LAST, LIKES,
		LOCATION, MEDIA_TYPE, NAME, NEXT, PART_OF, PREV, PREVIEW, PUBLISHED, REPLIES, SHARES,
		START_TIME, SUMMARY, TAG, TO, TOTAL_ITEMS, TYPE, UPDATED, URL,
	],
	extends: &[T::Collection, T::Object],
	extended_by: &[T::OrderedCollectionPage],
	disjoint_with: LINKS,
};

pub static ORDERED_COLLECTION_PAGE: TypeDef = TypeDef {
	kind: T::OrderedCollectionPage,
	properties: props![
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, CURRENT,
		DURATION, END_TIME, FIRST, GENERATOR, ICON, ID, IMAGE, IN_REPLY_TO, LAST, LIKES, LOCATION,
		MEDIA_TYPE, NAME, NEXT, ORDERED_ITEMS, PART_OF, PREV, PREVIEW, PUBLISHED, REPLIES, SHARES,
		START_INDEX, START_TIME, SUMMARY, TAG, TO, TOTAL_ITEMS, TYPE, UPDATED, URL,
	],
	extends: &[T::OrderedCollection, T::CollectionPage, T::Collection, T::Object],
	extended_by: &[],
	disjoint_with: LINKS,
};

/// every builtin type, in [crate::TypeKind] order
pub static ALL: &[&TypeDef] = &[
	&OBJECT,
	&LINK,
	&MENTION,
	&ACTIVITY,
	&INTRANSITIVE_ACTIVITY,
	&QUESTION,
	&CREATE,
	&LIKE,
	&NOTE,
	&ARTICLE,
	&DOCUMENT,
	&IMAGE,
	&PLACE,
	&PERSON,
	&COLLECTION,
	&ORDERED_COLLECTION,
	&COLLECTION_PAGE,
	&ORDERED_COLLECTION_PAGE,
];

#[cfg(test)]
mod test {
	use super::ALL;
	use crate::TypeKind;

	#[test]
	fn question_declares_its_full_property_set() {
		assert_eq!(super::QUESTION.properties.len(), 39);
		assert!(super::QUESTION.position("oneOf").is_some());
		assert!(super::QUESTION.position("object").is_none());
	}

	#[test]
	fn properties_are_sorted_by_name() {
		for def in ALL {
			for pair in def.properties.windows(2) {
				assert!(pair[0].name < pair[1].name, "{}: {} listed before {}", def.kind, pair[0].name, pair[1].name);
			}
		}
		let names: Vec<&str> = super::QUESTION.properties.iter().take(5).map(|p| p.name).collect();
		assert_eq!(names, ["actor", "altitude", "anyOf", "attachment", "attributedTo"]);
	}

	#[test]
	fn table_follows_kind_order() {
		let kinds: Vec<TypeKind> = ALL.iter().map(|d| d.kind).collect();
		assert_eq!(kinds, TypeKind::ALL);
	}

	#[test]
	fn property_names_are_unique_per_type() {
		for def in ALL {
			for (i, prop) in def.properties.iter().enumerate() {
				assert_eq!(def.position(prop.name), Some(i), "{} declares {} twice", def.kind, prop.name);
			}
		}
	}

	#[test]
	fn hierarchy_is_consistent() {
		for def in ALL {
			for parent in def.extends {
				let parent = ALL.iter().find(|d| d.kind == *parent).expect("unknown parent");
				assert!(parent.is_extended_by(def.kind), "{} should be extended by {}", parent.kind, def.kind);
			}
			for child in def.extended_by {
				let child = ALL.iter().find(|d| d.kind == *child).expect("unknown child");
				assert!(child.extends(def.kind), "{} should extend {}", child.kind, def.kind);
			}
			for other in def.disjoint_with {
				let other = ALL.iter().find(|d| d.kind == *other).expect("unknown disjoint type");
				assert!(other.is_disjoint_with(def.kind), "{} and {} disjoint one way only", def.kind, other.kind);
			}
		}
	}
}
