//! Codec implementations for tuples.
//!
//! Tuple fields are concatenated in order with no prefix or padding. Every
//! field must share one read configuration type, which in practice is `()`.

use crate::{
    buffer::WriteBuffer,
    codec::{EncodeSize, Read, Write},
    cursor::ReadCursor,
    error::Error,
};
use paste::paste;

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                #[inline]
                fn write(&self, buf: &mut WriteBuffer) {
                    $( self.$index.write(buf); )*
                }
            }

            impl<$( [<T $index>]: EncodeSize ),*> EncodeSize for ( $( [<T $index>], )* ) {
                #[inline]
                fn encode_size(&self) -> usize {
                    0 $( + self.$index.encode_size() )*
                }
            }

            impl<Cfg, $( [<T $index>]: Read<Cfg> ),*> Read<Cfg> for ( $( [<T $index>], )* ) {
                #[inline]
                fn read_cfg(cur: &mut ReadCursor<'_>, cfg: &Cfg) -> Result<Self, Error> {
                    Ok(( $( cur.read_cfg::<Cfg, [<T $index>]>(cfg)?, )* ))
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
