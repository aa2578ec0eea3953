use dynarray::DynamicArray;

fn main() {
    println!("--- Basic Usage ---");
    let mut arr = DynamicArray::new();

    for i in 1..=5 {
        arr.push(i * 10);
        println!("Pushed: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }

    println!("Elements: {:?}", &arr[..]);

    arr.insert_at(25, 2).expect("index in range");
    println!("After insert at 2: {:?}", &arr[..]);

    arr.sort();
    println!("Sorted: {:?}", &arr[..]);

    while let Ok(val) = arr.pop() {
        println!("Popped: {}, len: {}", val, arr.len());
    }
}
