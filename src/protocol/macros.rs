//! Declarative generators for schema types
//!
//! Setiap message BOE punya bentuk yang sama (header, root block, groups,
//! var data). Macro di sini membangkitkan flyweight dari deskripsi layout:
//!
//! ```ignore
//! sbe_message! {
//!     pub struct Sequence9 {
//!         template_id: 9,
//!         message_type: MessageType::Sequence,
//!         fix_type: "Sequence",
//!         block_length: 4,
//!         fields: {
//!             next_seq_no, set_next_seq_no: ordinary(u32) @ 0 tag 35529;
//!         },
//!         groups: {},
//!         data: {},
//!     }
//! }
//! ```
//!
//! Field kinds:
//! - `ordinary(T)` - always present
//! - `optional(T = null)` - `None` when the null sentinel is stored
//! - `enumeration(E)` / `optional_enum(E = null)`
//! - `fixed_str(N)` - NUL padded ASCII
//! - `composite(C)` / `optional_composite(C)`
//!
//! `tag N` is the FIX tag used by `to_fix`; composites have none and write
//! their own fields. A trailing `since N` marks a field added in schema
//! version `N`. Groups and var data always carry a tag.

/// Declares an enumeration encoded as its base integer. `char` declares
/// an enumeration of ASCII chars stored as `u8`.
macro_rules! sbe_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : char {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        sbe_enum!(@define [$(#[$meta])*] $name, u8, true, { $( [$(#[$vmeta])*] $variant = $value, )+ });
    };
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $base:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        sbe_enum!(@define [$(#[$meta])*] $name, $base, false, { $( [$(#[$vmeta])*] $variant = $value, )+ });
    };
    (
        @define [$(#[$meta:meta])*] $name:ident, $base:ty, $char_based:literal,
        { $( [$(#[$vmeta:meta])*] $variant:ident = $value:literal, )+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::core::SbeEnum for $name {
            type Base = $base;

            const TYPE_NAME: &'static str = stringify!($name);
            const CHAR_BASED: bool = $char_based;

            #[inline(always)]
            fn from_base(value: $base) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            #[inline(always)]
            fn to_base(self) -> $base {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl TryFrom<$base> for $name {
            type Error = $crate::core::Error;

            fn try_from(value: $base) -> $crate::core::Result<Self> {
                <Self as $crate::core::SbeEnum>::from_base(value).ok_or(
                    $crate::core::Error::InvalidEnumValue {
                        type_name: stringify!($name),
                        value: value.into(),
                    },
                )
            }
        }

        impl $crate::protocol::fix::FixValue for $name {
            fn write_fix(&self, out: &mut String) {
                $crate::protocol::fix::write_enum_base::<Self>(
                    $crate::core::SbeEnum::to_base(*self),
                    out,
                );
            }
        }
    };
}

macro_rules! sbe_since {
    () => {
        0
    };
    ($since:literal) => {
        $since
    };
}

macro_rules! sbe_field_getter {
    ([$(#[$meta:meta])*] $get:ident, ordinary($ty:ty), $offset:literal, []) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $get(&self) -> $ty {
            $crate::core::SbeFields::ordinary::<$ty>(self, $offset)
        }
    };
    ([$(#[$meta:meta])*] $get:ident, optional($ty:ty = $null:expr), $offset:literal, [$($since:literal)?]) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $get(&self) -> Option<$ty> {
            $crate::core::SbeFields::optional::<$ty>(self, $offset, $null, sbe_since!($($since)?))
        }
    };
    ([$(#[$meta:meta])*] $get:ident, enumeration($ty:ty), $offset:literal, []) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $get(&self) -> $crate::core::Result<$ty> {
            $crate::core::SbeFields::enumeration::<$ty>(self, $offset)
        }
    };
    ([$(#[$meta:meta])*] $get:ident, optional_enum($ty:ty = $null:expr), $offset:literal, [$($since:literal)?]) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $get(&self) -> $crate::core::Result<Option<$ty>> {
            $crate::core::SbeFields::optional_enumeration::<$ty>(
                self,
                $offset,
                $null,
                sbe_since!($($since)?),
            )
        }
    };
    ([$(#[$meta:meta])*] $get:ident, fixed_str($len:literal), $offset:literal, []) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $get(&self) -> $crate::core::StrRef<'_> {
            $crate::core::SbeFields::fixed_str(self, $offset, $len)
        }
    };
    ([$(#[$meta:meta])*] $get:ident, composite($ty:ty), $offset:literal, []) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $get(&self) -> $ty {
            $crate::core::SbeFields::composite::<$ty>(self, $offset)
        }
    };
    ([$(#[$meta:meta])*] $get:ident, optional_composite($ty:ty), $offset:literal, [$($since:literal)?]) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $get(&self) -> Option<$ty> {
            $crate::core::SbeFields::optional_composite::<$ty>(self, $offset, sbe_since!($($since)?))
        }
    };
}

macro_rules! sbe_field_setter {
    ($get:ident, $set:ident, ordinary($ty:ty), $offset:literal, []) => {
        #[inline(always)]
        pub fn $set(&mut self, value: $ty) -> &mut Self {
            $crate::core::SbeFieldsMut::set_ordinary::<$ty>(self, $offset, value);
            self
        }
    };
    ($get:ident, $set:ident, optional($ty:ty = $null:expr), $offset:literal, []) => {
        /// `None` stores the null value.
        #[inline(always)]
        pub fn $set(&mut self, value: Option<$ty>) -> &mut Self {
            $crate::core::SbeFieldsMut::set_ordinary::<$ty>(self, $offset, value.unwrap_or($null));
            self
        }
    };
    ($get:ident, $set:ident, optional($ty:ty = $null:expr), $offset:literal, [$since:literal]) => {
        /// Fails with `DisallowedField` below the version that added the field.
        pub fn $set(&mut self, value: Option<$ty>) -> $crate::core::Result<&mut Self> {
            $crate::core::SbeFieldsMut::check_since(self, stringify!($get), $since)?;
            $crate::core::SbeFieldsMut::set_ordinary::<$ty>(self, $offset, value.unwrap_or($null));
            Ok(self)
        }
    };
    ($get:ident, $set:ident, enumeration($ty:ty), $offset:literal, []) => {
        #[inline(always)]
        pub fn $set(&mut self, value: $ty) -> &mut Self {
            $crate::core::SbeFieldsMut::set_enumeration::<$ty>(self, $offset, value);
            self
        }
    };
    ($get:ident, $set:ident, optional_enum($ty:ty = $null:expr), $offset:literal, []) => {
        #[inline(always)]
        pub fn $set(&mut self, value: Option<$ty>) -> &mut Self {
            match value {
                Some(value) => $crate::core::SbeFieldsMut::set_enumeration::<$ty>(self, $offset, value),
                None => $crate::core::SbeFieldsMut::set_ordinary::<<$ty as $crate::core::SbeEnum>::Base>(
                    self, $offset, $null,
                ),
            }
            self
        }
    };
    ($get:ident, $set:ident, optional_enum($ty:ty = $null:expr), $offset:literal, [$since:literal]) => {
        pub fn $set(&mut self, value: Option<$ty>) -> $crate::core::Result<&mut Self> {
            $crate::core::SbeFieldsMut::check_since(self, stringify!($get), $since)?;
            match value {
                Some(value) => $crate::core::SbeFieldsMut::set_enumeration::<$ty>(self, $offset, value),
                None => $crate::core::SbeFieldsMut::set_ordinary::<<$ty as $crate::core::SbeEnum>::Base>(
                    self, $offset, $null,
                ),
            }
            Ok(self)
        }
    };
    ($get:ident, $set:ident, fixed_str($len:literal), $offset:literal, []) => {
        /// Fails with `ValueTooLong` when `value` does not fit the field.
        pub fn $set(&mut self, value: &str) -> $crate::core::Result<&mut Self> {
            $crate::core::SbeFieldsMut::set_fixed_str(self, stringify!($get), $offset, $len, value)?;
            Ok(self)
        }
    };
    ($get:ident, $set:ident, composite($ty:ty), $offset:literal, []) => {
        #[inline(always)]
        pub fn $set(&mut self, value: $ty) -> &mut Self {
            $crate::core::SbeFieldsMut::set_composite::<$ty>(self, $offset, &value);
            self
        }
    };
    ($get:ident, $set:ident, optional_composite($ty:ty), $offset:literal, []) => {
        #[inline(always)]
        pub fn $set(&mut self, value: Option<$ty>) -> &mut Self {
            let value = value.unwrap_or(<$ty as $crate::core::NullableComposite>::NULL);
            $crate::core::SbeFieldsMut::set_composite::<$ty>(self, $offset, &value);
            self
        }
    };
}

/// Stores the null value of optional fields present in the block's version.
macro_rules! sbe_field_to_null {
    ($this:ident, optional($ty:ty = $null:expr), $offset:literal, []) => {
        $crate::core::SbeFieldsMut::set_ordinary::<$ty>($this, $offset, $null);
    };
    ($this:ident, optional($ty:ty = $null:expr), $offset:literal, [$since:literal]) => {
        if $crate::core::SbeFields::version($this) >= $since {
            $crate::core::SbeFieldsMut::set_ordinary::<$ty>($this, $offset, $null);
        }
    };
    ($this:ident, optional_enum($ty:ty = $null:expr), $offset:literal, []) => {
        $crate::core::SbeFieldsMut::set_ordinary::<<$ty as $crate::core::SbeEnum>::Base>(
            $this, $offset, $null,
        );
    };
    ($this:ident, optional_enum($ty:ty = $null:expr), $offset:literal, [$since:literal]) => {
        if $crate::core::SbeFields::version($this) >= $since {
            $crate::core::SbeFieldsMut::set_ordinary::<<$ty as $crate::core::SbeEnum>::Base>(
                $this, $offset, $null,
            );
        }
    };
    ($this:ident, optional_composite($ty:ty), $offset:literal, []) => {
        $crate::core::SbeFieldsMut::set_composite::<$ty>(
            $this,
            $offset,
            &<$ty as $crate::core::NullableComposite>::NULL,
        );
    };
    ($this:ident, $kind:ident($($arg:tt)*), $offset:literal, [$($since:literal)?]) => {};
}

macro_rules! sbe_field_debug {
    ($out:ident, $this:ident, $get:ident, enumeration($($arg:tt)*)) => {
        $out.field(stringify!($get), &$crate::protocol::Decoded($this.$get()));
    };
    ($out:ident, $this:ident, $get:ident, optional_enum($($arg:tt)*)) => {
        $out.field(stringify!($get), &$crate::protocol::Decoded($this.$get()));
    };
    ($out:ident, $this:ident, $get:ident, $kind:ident($($arg:tt)*)) => {
        $out.field(stringify!($get), &$this.$get());
    };
}

/// Read accessors of groups and var data. `[1 1 ..]` counts the tail
/// elements emitted so far, giving each accessor its tail index.
macro_rules! sbe_tail_read {
    ([$($idx:tt)*]) => {};
    ([$($idx:tt)*] group $group:ident : $entry:ident; $($rest:tt)*) => {
        pub fn $group(&self) -> $crate::core::Group<'_, $entry<&[u8]>> {
            let offset = self.msg.tail_offset(Self::TAIL, 0 $(+ $idx)*);
            self.msg.group(offset)
        }

        sbe_tail_read!([$($idx)* 1] $($rest)*);
    };
    ([$($idx:tt)*] data $data:ident : $encoding:ident; $($rest:tt)*) => {
        pub fn $data(&self) -> $crate::core::StrRef<'_> {
            self.msg.var_data(self.msg.tail_offset(Self::TAIL, 0 $(+ $idx)*))
        }

        sbe_tail_read!([$($idx)* 1] $($rest)*);
    };
}

macro_rules! sbe_tail_write {
    ([$($idx:tt)*]) => {};
    ([$($idx:tt)*] group $group:ident, $setup:ident, $group_mut:ident : $entry:ident; $($rest:tt)*) => {
        /// Resizes the group to `count` entries, moving the data behind it.
        /// Existing entries are kept, new ones start with null fields.
        pub fn $setup(
            &mut self,
            count: $crate::core::NumInGroup,
        ) -> $crate::core::Result<$crate::core::GroupMut<'_, $entry<&mut [u8]>>> {
            let index = 0 $(+ $idx)*;
            let previous = self.msg.setup_group(Self::TAIL, index, count)?;
            let offset = self.msg.tail_offset(Self::TAIL, index);
            let group: $crate::core::GroupMut<'_, $entry<&mut [u8]>> = self.msg.group_mut(offset);
            for mut entry in group.into_iter().skip(previous as usize) {
                entry.reset();
            }
            Ok(self.msg.group_mut(offset))
        }

        pub fn $group_mut(&mut self) -> $crate::core::GroupMut<'_, $entry<&mut [u8]>> {
            let offset = self.msg.tail_offset(Self::TAIL, 0 $(+ $idx)*);
            self.msg.group_mut(offset)
        }

        sbe_tail_write!([$($idx)* 1] $($rest)*);
    };
    ([$($idx:tt)*] data $data:ident, $set:ident : $encoding:ident; $($rest:tt)*) => {
        /// An empty value stores the null (zero length) var data.
        pub fn $set(&mut self, value: impl AsRef<[u8]>) -> $crate::core::Result<&mut Self> {
            self.msg
                .set_var_data(Self::TAIL, 0 $(+ $idx)*, stringify!($data), value.as_ref())?;
            Ok(self)
        }

        sbe_tail_write!([$($idx)* 1] $($rest)*);
    };
}

/// Writes one field as FIX. Composites without a tag expand to their own
/// fields.
macro_rules! sbe_field_fix {
    ($w:ident, $this:ident, $get:ident, ordinary($ty:ty), $offset:literal, [], [$tag:literal]) => {
        $w.field($tag, &$this.$get());
    };
    ($w:ident, $this:ident, $get:ident, optional($($arg:tt)*), $offset:literal, [$($since:literal)?], [$tag:literal]) => {
        $w.optional($tag, $this.$get());
    };
    ($w:ident, $this:ident, $get:ident, enumeration($ty:ty), $offset:literal, [], [$tag:literal]) => {
        $w.enumeration::<$ty>(
            $tag,
            $crate::core::SbeFields::ordinary::<<$ty as $crate::core::SbeEnum>::Base>($this, $offset),
        );
    };
    ($w:ident, $this:ident, $get:ident, optional_enum($ty:ty = $null:expr), $offset:literal, [$($since:literal)?], [$tag:literal]) => {
        if let Some(raw) = $crate::core::SbeFields::optional::<<$ty as $crate::core::SbeEnum>::Base>(
            $this,
            $offset,
            $null,
            sbe_since!($($since)?),
        ) {
            $w.enumeration::<$ty>($tag, raw);
        }
    };
    ($w:ident, $this:ident, $get:ident, fixed_str($len:literal), $offset:literal, [], [$tag:literal]) => {
        $w.text($tag, $this.$get());
    };
    ($w:ident, $this:ident, $get:ident, composite($ty:ty), $offset:literal, [], []) => {
        $crate::protocol::fix::FixComposite::write_fix_fields(&$this.$get(), $w);
    };
    ($w:ident, $this:ident, $get:ident, optional_composite($ty:ty), $offset:literal, [$($since:literal)?], []) => {
        if let Some(value) = $this.$get() {
            $crate::protocol::fix::FixComposite::write_fix_fields(&value, $w);
        }
    };
}

/// Declares a repeating group entry flyweight.
macro_rules! sbe_group_entry {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            block_length: $block_length:literal,
            fields: {
                $(
                    $(#[$fmeta:meta])*
                    $get:ident, $set:ident : $kind:ident ( $($arg:tt)* ) @ $offset:literal $( tag $tag:literal )? $( since $since:literal )?;
                )*
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name<B> {
            data: B,
            version: $crate::core::SchemaVersion,
        }

        impl<B> $name<B> {
            /// Minimal encoded size of one entry.
            pub const BLOCK_LENGTH: $crate::core::BlockLength = $block_length;
        }

        impl<B> $crate::core::SbeEntry<B> for $name<B> {
            #[inline(always)]
            fn wrap(data: B, version: $crate::core::SchemaVersion) -> Self {
                Self { data, version }
            }
        }

        impl<B: AsRef<[u8]>> $crate::core::SbeFields for $name<B> {
            #[inline(always)]
            fn block(&self) -> &[u8] {
                self.data.as_ref()
            }

            #[inline(always)]
            fn version(&self) -> $crate::core::SchemaVersion {
                self.version
            }
        }

        impl<B: AsRef<[u8]> + AsMut<[u8]>> $crate::core::SbeFieldsMut for $name<B> {
            #[inline(always)]
            fn block_mut(&mut self) -> &mut [u8] {
                self.data.as_mut()
            }
        }

        impl<B: AsRef<[u8]>> $name<B> {
            $( sbe_field_getter!([$(#[$fmeta])*] $get, $kind($($arg)*), $offset, [$($since)?]); )*

            /// Appends the entry fields as FIX.
            pub fn write_fix(&self, w: &mut $crate::protocol::fix::FixWriter<'_>) {
                $( sbe_field_fix!(w, self, $get, $kind($($arg)*), $offset, [$($since)?], [$($tag)?]); )*
            }
        }

        impl<B: AsRef<[u8]> + AsMut<[u8]>> $name<B> {
            /// Zeroes the entry and nulls its optional fields.
            pub fn reset(&mut self) -> &mut Self {
                self.data.as_mut().fill(0);
                $( sbe_field_to_null!(self, $kind($($arg)*), $offset, [$($since)?]); )*
                self
            }

            $( sbe_field_setter!($get, $set, $kind($($arg)*), $offset, [$($since)?]); )*
        }

        impl<B: AsRef<[u8]>> std::fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut out = f.debug_struct(stringify!($name));
                $( sbe_field_debug!(out, self, $get, $kind($($arg)*)); )*
                out.finish()
            }
        }
    };
}

/// Declares a message flyweight.
macro_rules! sbe_message {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            template_id: $template_id:literal,
            message_type: $message_type:expr,
            fix_type: $fix_type:literal,
            block_length: $block_length:literal,
            $( since_versions: { $( $since_version:literal => $since_length:literal ),* $(,)? }, )?
            fields: {
                $(
                    $(#[$fmeta:meta])*
                    $get:ident, $set:ident : $kind:ident ( $($arg:tt)* ) @ $offset:literal $( tag $tag:literal )? $( since $since:literal )?;
                )*
            },
            groups: {
                $( $group:ident, $setup:ident, $group_mut:ident : $entry:ident tag $group_tag:literal; )*
            },
            data: {
                $( $data:ident, $set_data:ident : $encoding:ident tag $data_tag:literal; )*
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name<B> {
            msg: $crate::core::SbeMessage<B>,
        }

        impl<B> $name<B> {
            pub const TEMPLATE_ID: $crate::core::TemplateId = $template_id;
            pub const MESSAGE_TYPE: $crate::protocol::MessageType = $message_type;
            /// FIX `MsgType` name of the message.
            pub const FIX_TYPE: &'static str = $fix_type;
            pub const CLASS_NAME: &'static str = stringify!($name);
            /// Root block length at the minimal schema version.
            pub const MINIMAL_BLOCK_LENGTH: $crate::core::BlockLength = $block_length;

            const TAIL: &'static [$crate::core::TailKind] = &[
                $( $crate::core::TailKind::Group { entry_length: $entry::<()>::BLOCK_LENGTH }, )*
                $( $crate::core::TailKind::VarData { max_length: $encoding::MAX_LENGTH }, )*
            ];

            /// Root block length of the given schema version.
            pub const fn block_length(version: $crate::core::SchemaVersion) -> $crate::core::BlockLength {
                #[allow(unused_mut)]
                let mut length = $block_length;
                $( $( if version >= $since_version { length = $since_length; } )* )?
                let _ = version;
                length
            }

            /// Size of the tail with empty groups and null var data.
            pub const fn minimal_variable_fields_size() -> usize {
                $crate::core::minimal_tail_size(Self::TAIL)
            }

            /// Upper bound of the encoded size (header included) with every
            /// group holding `max_group_items` entries.
            pub const fn max_binary_size(max_group_items: $crate::core::NumInGroup) -> usize {
                $crate::core::HEADER_SIZE
                    + Self::block_length($crate::protocol::SCHEMA_VERSION) as usize
                    + $crate::core::max_tail_size(Self::TAIL, max_group_items)
            }
        }

        impl<B: AsRef<[u8]>> $name<B> {
            /// Wraps an encoded message, validating header, block and tail.
            pub fn wrap(buf: B) -> $crate::core::Result<Self> {
                Self::from_sbe($crate::core::SbeMessage::wrap(buf)?)
            }

            pub fn from_sbe(msg: $crate::core::SbeMessage<B>) -> $crate::core::Result<Self> {
                msg.check_template(Self::TEMPLATE_ID, Self::CLASS_NAME)?;
                msg.check_schema(
                    $crate::protocol::SCHEMA_ID,
                    $crate::protocol::MINIMAL_SCHEMA_VERSION,
                    $crate::protocol::SCHEMA_VERSION,
                )?;
                msg.check_length(Self::block_length(msg.version()), Self::TAIL, Self::CLASS_NAME)?;
                msg.check_tail(Self::TAIL)?;
                Ok(Self { msg })
            }

            #[inline(always)]
            pub fn sbe(&self) -> &$crate::core::SbeMessage<B> {
                &self.msg
            }

            #[inline(always)]
            pub fn header(&self) -> $crate::core::MessageHeader {
                self.msg.header()
            }

            #[inline(always)]
            pub fn version(&self) -> $crate::core::SchemaVersion {
                self.msg.version()
            }

            /// Encoded size: header, root block and tail.
            pub fn calculate_binary_size(&self) -> usize {
                self.msg.calculate_binary_size(Self::TAIL)
            }

            /// The encoded message without unused buffer capacity.
            pub fn as_bytes(&self) -> &[u8] {
                self.msg.as_bytes(Self::TAIL)
            }

            pub fn into_inner(self) -> B {
                self.msg.into_inner()
            }

            $( sbe_field_getter!([$(#[$fmeta])*] $get, $kind($($arg)*), $offset, [$($since)?]); )*

            /// Appends the message as FIX tag=value fields, `MsgType` first.
            /// Null fields, empty groups and empty strings are left out.
            pub fn to_fix(&self, out: &mut String) {
                let mut w = $crate::protocol::fix::FixWriter::new(out);
                let w = &mut w;
                w.field(
                    $crate::protocol::fix::TAG_MSG_TYPE,
                    $crate::protocol::fix::fix_msg_type(Self::FIX_TYPE),
                );
                $( sbe_field_fix!(w, self, $get, $kind($($arg)*), $offset, [$($since)?], [$($tag)?]); )*
                $(
                    let group = self.$group();
                    if !group.is_empty() {
                        w.field($group_tag, &(group.len() as u32));
                        for entry in group.iter() {
                            entry.write_fix(w);
                        }
                    }
                )*
                $( w.text($data_tag, self.$data()); )*
            }

            sbe_tail_read!([] $( group $group : $entry; )* $( data $data : $encoding; )*);
        }

        impl<B: AsRef<[u8]> + AsMut<[u8]>> $name<B> {
            /// Initializes a message of the current schema version.
            pub fn new(buf: B) -> $crate::core::Result<Self> {
                Self::with_version(buf, $crate::protocol::SCHEMA_VERSION)
            }

            /// Writes the header, zeroes the root block, nulls optional
            /// fields and leaves every group empty and var data null.
            pub fn with_version(
                buf: B,
                version: $crate::core::SchemaVersion,
            ) -> $crate::core::Result<Self> {
                $crate::protocol::check_version(version)?;
                let msg = $crate::core::SbeMessage::init(
                    buf,
                    Self::TEMPLATE_ID,
                    Self::block_length(version),
                    $crate::protocol::SCHEMA_ID,
                    version,
                    Self::TAIL,
                    Self::CLASS_NAME,
                )?;
                let mut message = Self { msg };
                message.null_optional_fields();
                Ok(message)
            }

            /// Back to the freshly initialized state, keeping the version.
            pub fn reset(&mut self) -> &mut Self {
                let length = self.msg.block_length() as usize;
                $crate::core::SbeFieldsMut::zero_padding(self, 0, length);
                self.null_optional_fields();
                self.msg.reset_tail(Self::TAIL);
                self
            }

            #[inline(always)]
            pub fn buffer_mut(&mut self) -> &mut [u8] {
                self.msg.buffer_mut()
            }

            fn null_optional_fields(&mut self) {
                $( sbe_field_to_null!(self, $kind($($arg)*), $offset, [$($since)?]); )*
            }

            $( sbe_field_setter!($get, $set, $kind($($arg)*), $offset, [$($since)?]); )*

            sbe_tail_write!(
                []
                $( group $group, $setup, $group_mut : $entry; )*
                $( data $data, $set_data : $encoding; )*
            );
        }

        impl<B: AsRef<[u8]>> $crate::core::SbeFields for $name<B> {
            #[inline(always)]
            fn block(&self) -> &[u8] {
                $crate::core::SbeFields::block(&self.msg)
            }

            #[inline(always)]
            fn version(&self) -> $crate::core::SchemaVersion {
                self.msg.version()
            }
        }

        impl<B: AsRef<[u8]> + AsMut<[u8]>> $crate::core::SbeFieldsMut for $name<B> {
            #[inline(always)]
            fn block_mut(&mut self) -> &mut [u8] {
                $crate::core::SbeFieldsMut::block_mut(&mut self.msg)
            }
        }

        impl<B: AsRef<[u8]>> $crate::protocol::BoeMessage<B> for $name<B> {
            const TEMPLATE_ID: $crate::core::TemplateId = $template_id;
            const MESSAGE_TYPE: $crate::protocol::MessageType = $message_type;
            const CLASS_NAME: &'static str = stringify!($name);

            fn wrap(buf: B) -> $crate::core::Result<Self> {
                Self::wrap(buf)
            }

            fn max_binary_size(max_group_items: $crate::core::NumInGroup) -> usize {
                Self::max_binary_size(max_group_items)
            }

            fn calculate_binary_size(&self) -> usize {
                Self::calculate_binary_size(self)
            }

            fn inner(&self) -> &B {
                self.msg.inner()
            }

            fn into_inner(self) -> B {
                Self::into_inner(self)
            }
        }

        impl<B: AsRef<[u8]> + AsMut<[u8]>> $crate::protocol::BoeMessageMut<B> for $name<B> {
            fn with_version(buf: B, version: $crate::core::SchemaVersion) -> $crate::core::Result<Self> {
                Self::with_version(buf, version)
            }

            fn inner_mut(&mut self) -> &mut B {
                self.msg.inner_mut()
            }
        }

        impl<B: AsRef<[u8]>> std::fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut out = f.debug_struct(stringify!($name));
                $( sbe_field_debug!(out, self, $get, $kind($($arg)*)); )*
                $( out.field(stringify!($group), &self.$group()); )*
                $( out.field(stringify!($data), &self.$data()); )*
                out.finish()
            }
        }
    };
}
