pub fn create_buf<T>(len: usize, value: T) -> Vec<T>
where
    T: Clone,
{
    let mut buf = Vec::<T>::new();
    buf.reserve_exact(len);
    buf.resize(len, value);
    buf
}

pub fn create_buf_with<T, F>(len: usize, f: F) -> Vec<T>
where
    F: FnMut() -> T,
{
    let mut buf = Vec::<T>::new();
    buf.reserve_exact(len);
    buf.resize_with(len, f);
    buf
}
