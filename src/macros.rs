macro_rules! deref0 {
    (+mut $name:ident => $tp:ty) => {
        deref0! {-mut $name => $tp }
        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
    (-mut $name:ident => $tp:ty) => {
        impl ::std::ops::Deref for $name {
            type Target = $tp;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

#[cfg(test)]
macro_rules! assert_ok {
    ($val:expr) => {{
        match $val {
            Ok(res) => res,
            Err(err) => panic!("expected Ok(..) got Err({:?})", err),
        }
    }};
}

#[cfg(test)]
macro_rules! assert_err {
    ($val:expr) => {{
        match $val {
            Ok(res) => panic!("expected Err(..) got Ok({:?})", res),
            Err(err) => err,
        }
    }};
}
