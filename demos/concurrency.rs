use dynarray::DynamicArray;
use std::thread;

fn main() {
    println!("--- Cross-thread Ownership Transfer ---");
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.push(i);
    }

    println!("Array in main thread: {:?}", &arr[..]);

    let handle = thread::spawn(move || {
        println!("Array in worker thread: {:?}", &arr[..]);
        arr.push(100);
        arr
    });

    let arr = handle.join().unwrap();
    println!("Array back in main thread: {:?}", &arr[..]);
}
