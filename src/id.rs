use once_cell::sync::Lazy;
use parking_lot::Mutex;

pub type ToastId = usize;

struct IdGenerator {
    next_id: usize,
}

fn next_id() -> usize {
    static ID_GENERATOR: Lazy<Mutex<IdGenerator>> =
        Lazy::new(|| Mutex::new(IdGenerator { next_id: 0 }));
    let mut id_generator = ID_GENERATOR.lock();
    let id = id_generator.next_id;
    id_generator.next_id += 1;
    id
}

pub fn next_toast_id() -> ToastId {
    next_id()
}
