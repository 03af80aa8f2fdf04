use yew::prelude::*;

/// Panel de la pestaña de doctor: perfil, cola de pacientes y citas del
/// día. Los datos clínicos reales llegan de módulos fuera de este front.
#[function_component(DoctorPanel)]
pub fn doctor_panel() -> Html {
    let queue = [
        ("T001", "Arun Kumar", "Waiting"),
        ("T002", "Meena Devi", "In Consultation"),
        ("T003", "Ravi Teja", "Waiting"),
        ("T004", "Sara Khan", "Completed"),
    ];

    let appointments = [
        ("09:00 AM", "Arun Kumar", "Fever & Cold", "Scheduled"),
        ("10:00 AM", "Sangeetha Raj", "Pregnancy Check-up", "In Progress"),
        ("11:00 AM", "David John", "Follow-up: Diabetes", "Completed"),
    ];

    html! {
        <div class="doctor-panel">
            <div class="doctor-profile">
                <h3>{"Dr. Rajeev Menon"}</h3>
                <p>{"General Medicine · 12 Years"}</p>
                <p class="muted">{"Mon - Fri, 9:00 AM - 4:00 PM"}</p>
            </div>

            <div class="doctor-queue">
                <h4>{"Patient Queue"}</h4>
                <ul>
                    { for queue.iter().map(|(token, name, status)| html! {
                        <li key={*token}>
                            <span class="queue-token">{token}</span>
                            <span>{name}</span>
                            <span class="queue-status">{status}</span>
                        </li>
                    }) }
                </ul>
            </div>

            <div class="doctor-appointments">
                <h4>{"Today's Appointments"}</h4>
                <table>
                    <thead>
                        <tr>
                            <th>{"Time"}</th>
                            <th>{"Patient"}</th>
                            <th>{"Reason"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for appointments.iter().map(|(time, name, reason, status)| html! {
                            <tr key={*time}>
                                <td>{time}</td>
                                <td>{name}</td>
                                <td>{reason}</td>
                                <td>{status}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
